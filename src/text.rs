//! Plain-text helpers for cleaning provider markup and deriving display values.

use std::sync::LazyLock;

use regex::Regex;

/// Characters shown in a collapsed result row.
pub const SNIPPET_CHARS: usize = 180;
/// Characters of body used when a document has no summary.
pub const SUMMARY_FALLBACK_CHARS: usize = 200;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

// Sentence-ending punctuation followed by whitespace; the punctuation stays with its sentence.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence pattern"));

/// Replace every `<...>` with a space, collapse whitespace runs, and trim.
///
/// An unmatched `<` is left as text.
pub fn strip_html(text: &str) -> String {
    let without_tags = TAG.replace_all(text, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Truncate to `max` characters, appending `…` when anything was cut.
pub fn with_ellipsis(text: &str, max: usize) -> String {
    let head = truncate_chars(text, max);
    if head.len() < text.len() {
        format!("{head}…")
    } else {
        head.to_string()
    }
}

/// Split after `.`, `!` or `?` when followed by whitespace. Pieces are trimmed
/// and empty pieces dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BREAK.find_iter(text) {
        // the punctuation is a single ASCII byte
        pieces.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
