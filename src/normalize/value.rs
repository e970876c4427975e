use serde::Deserialize;
use serde_json::{Map, Value};

/// The shapes a text-bearing provider field arrives in.
///
/// Anything else (numbers, booleans, null) fails to decode and is treated as absent.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawText {
    Plain(String),
    List(Vec<Value>),
    Fields(Map<String, Value>),
}

impl RawText {
    pub(crate) fn decode(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Collapse to a single string. Lists and mappings keep their non-empty
    /// string members in provider order, joined by single spaces.
    pub(crate) fn into_text(self) -> Option<String> {
        let text = match self {
            RawText::Plain(s) => s,
            RawText::List(items) => join_strings(items.iter()),
            RawText::Fields(fields) => join_strings(fields.values()),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn join_strings<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values
        .filter_map(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
