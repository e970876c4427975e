//! Response normalization: turn any of the provider's document schemas into
//! canonical [`Document`]s and optional [`ResultStats`].
//!
//! Nothing here fails. Unexpected shapes degrade to empty results or absent fields.

mod rules;
mod stats;
mod value;

pub use stats::{ResultStats, extract_stats};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::text::{
    SNIPPET_CHARS, SUMMARY_FALLBACK_CHARS, sentences, strip_html, truncate_chars, with_ellipsis,
};

/// A display-ready document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Never empty: falls back to `Untitled #n` (1-based position).
    pub header: String,
    pub summary: String,
    /// Markup stripped and whitespace collapsed.
    pub body: String,
    pub url: String,
    /// Provider timestamp text, not reformatted.
    pub published: String,
    pub source: String,
    pub language: String,
    pub country: String,
}

impl Document {
    fn from_raw(item: &Value, index: usize) -> Self {
        let body = rules::resolve(item, rules::BODY)
            .map(|raw| strip_html(&raw))
            .unwrap_or_default();
        let header = rules::resolve(item, rules::HEADER)
            .unwrap_or_else(|| format!("Untitled #{}", index + 1));
        let summary = rules::resolve(item, rules::SUMMARY)
            .unwrap_or_else(|| truncate_chars(&body, SUMMARY_FALLBACK_CHARS).to_string());

        Self {
            header,
            summary,
            url: field(item, rules::URL),
            published: field(item, rules::PUBLISHED),
            source: field(item, rules::SOURCE),
            language: field(item, rules::LANGUAGE),
            country: field(item, rules::COUNTRY),
            body,
        }
    }

    /// Summary, or body when the summary is empty.
    pub fn preview_text(&self) -> &str {
        if self.summary.is_empty() {
            &self.body
        } else {
            &self.summary
        }
    }

    /// Collapsed row text: the first 180 characters of [`Self::preview_text`],
    /// with an ellipsis when cut.
    pub fn snippet(&self) -> String {
        with_ellipsis(self.preview_text(), SNIPPET_CHARS)
    }

    /// Body split into sentences. Fewer than two means the body should be shown as one block.
    pub fn sentences(&self) -> Vec<&str> {
        sentences(&self.body)
    }
}

fn field(item: &Value, chain: &[rules::Rule]) -> String {
    rules::resolve(item, chain).unwrap_or_default()
}

/// Normalize a raw search response into documents, preserving response order.
pub fn normalize(raw: &Value) -> Vec<Document> {
    let Some(items) = document_array(raw) else {
        debug!("no document array in response");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| Document::from_raw(item, index))
        .collect()
}

/// The `searchresult` container, under either spelling.
fn search_result(raw: &Value) -> Option<&Map<String, Value>> {
    ["searchresult", "searchResult"]
        .into_iter()
        .find_map(|key| raw.get(key)?.as_object())
}

/// First array-typed candidate, in fixed priority order. Later candidates are
/// never consulted once one matches.
fn document_array(raw: &Value) -> Option<&Vec<Value>> {
    search_result(raw).and_then(container_array).or_else(|| {
        ["documents", "document", "results"]
            .into_iter()
            .find_map(|key| raw.get(key)?.as_array())
    })
}

/// `document`, then `documents`, inside the container; the first array wins.
fn container_array(container: &Map<String, Value>) -> Option<&Vec<Value>> {
    ["document", "documents"]
        .into_iter()
        .find_map(|key| container.get(key)?.as_array())
}
