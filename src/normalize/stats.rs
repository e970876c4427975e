use serde::Serialize;
use serde_json::Value;

use super::{container_array, search_result};

/// Response-level counters. Every field is optional; absent never means zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Provider-side processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_time: Option<u64>,
}

impl ResultStats {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read stats from the `searchresult` container. `None` when the response has no container.
pub fn extract_stats(raw: &Value) -> Option<ResultStats> {
    let container = search_result(raw)?;
    let integer = |key: &str| container.get(key).and_then(Value::as_u64);
    let string = |key: &str| container.get(key).and_then(Value::as_str).map(str::to_string);

    let document_count = integer("documents")
        .or_else(|| container_array(container).map(|docs| docs.len() as u64));

    Some(ResultStats {
        document_count,
        total_count: integer("count"),
        range_count: integer("range_count"),
        range_id: string("range_id"),
        host: string("host"),
        context: string("context"),
        cpu_time: integer("cputime"),
    })
}
