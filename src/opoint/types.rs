use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryRequest;

/// Body of `POST /search/`.
#[derive(Debug, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "searchterm")]
    pub search_term: String,
    pub params: SearchParams,
}

#[derive(Debug, Serialize)]
pub struct SearchParams {
    #[serde(rename = "requestedarticles")]
    pub requested_articles: u32,
    pub main: MainFields,
}

/// Which document fields the provider returns.
///
/// `header` and `summary` accept 0 (omit), 1 (plain) or 2 (with match markup);
/// `text` accepts 0 or 1.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MainFields {
    pub header: u8,
    pub summary: u8,
    pub text: u8,
}

impl Default for MainFields {
    fn default() -> Self {
        Self {
            header: 1,
            summary: 1,
            text: 1,
        }
    }
}

impl From<&QueryRequest> for SearchRequest {
    fn from(query: &QueryRequest) -> Self {
        Self {
            search_term: query.term.clone(),
            params: SearchParams {
                requested_articles: query.requested_count,
                main: MainFields::default(),
            },
        }
    }
}

/// Error payload the API returns with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// `detail` as display text. Strings are used verbatim, other non-empty values
    /// as compact JSON; `null`, `false`, `0` and `""` yield nothing.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}
