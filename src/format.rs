//! Terminal rendering of a [`SearchOutcome`].

use crate::normalize::{Document, ResultStats};
use crate::search::SearchOutcome;
use crate::text::truncate_chars;

const PUBLISHED_CHARS: usize = 19;

pub fn format_outcome(outcome: &SearchOutcome, expand: bool) -> String {
    let mut out = format!(
        "Search: {} ({} requested)\n",
        outcome.search_term, outcome.requested_articles
    );

    if let Some(stats) = &outcome.stats {
        format_stats(stats, &mut out);
    }
    out.push('\n');

    if outcome.documents.is_empty() {
        out.push_str("No documents found in response.\n");
        return out;
    }

    for (index, doc) in outcome.documents.iter().enumerate() {
        format_document(index, doc, expand, &mut out);
    }

    out
}

/// One `label: value` pair per present stat; absent values are skipped entirely.
fn format_stats(stats: &ResultStats, out: &mut String) {
    let numbers = [
        ("Documents", stats.document_count),
        ("Count", stats.total_count),
        ("Range count", stats.range_count),
    ];
    let strings = [
        ("Range ID", stats.range_id.as_deref()),
        ("Host", stats.host.as_deref()),
        ("Context", stats.context.as_deref()),
    ];

    let mut pairs: Vec<String> = numbers
        .into_iter()
        .filter_map(|(label, value)| Some(format!("{label}: {}", value?)))
        .collect();
    pairs.extend(strings.into_iter().filter_map(|(label, value)| {
        value
            .filter(|v| !v.is_empty())
            .map(|v| format!("{label}: {v}"))
    }));
    if let Some(ms) = stats.cpu_time {
        pairs.push(format!("CPU time: {ms} ms"));
    }

    if !pairs.is_empty() {
        out.push_str(&pairs.join(" | "));
        out.push('\n');
    }
}

fn format_document(index: usize, doc: &Document, expand: bool, out: &mut String) {
    let source: &str = if doc.source.is_empty() {
        "Unknown source"
    } else {
        &doc.source
    };
    out.push_str(&format!("{}. {}\n", index + 1, doc.header));
    out.push_str(&format!("   {source}"));
    if !doc.published.is_empty() {
        out.push_str(&format!(" · {}", truncate_chars(&doc.published, PUBLISHED_CHARS)));
    }
    out.push('\n');

    if expand {
        let text = doc.preview_text();
        let text = if text.is_empty() { "No body text" } else { text };
        out.push_str(&format!("   {text}\n"));
    } else {
        let snippet = doc.snippet();
        if !snippet.is_empty() {
            out.push_str(&format!("   {snippet}\n"));
        }
    }

    let tags: Vec<String> = [&doc.language, &doc.country]
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| format!("[{t}]"))
        .collect();
    if !tags.is_empty() {
        out.push_str(&format!("   {}\n", tags.join(" ")));
    }
    if !doc.url.is_empty() {
        out.push_str(&format!("   {}\n", doc.url));
    }

    if expand && !doc.body.is_empty() {
        format_body(doc, out);
    }
    out.push('\n');
}

/// Bulleted sentences when there are at least two, otherwise the body as one block.
fn format_body(doc: &Document, out: &mut String) {
    out.push_str("   Body:\n");
    let sentences = doc.sentences();
    if sentences.len() > 1 {
        for sentence in sentences {
            out.push_str(&format!("     - {sentence}\n"));
        }
    } else {
        out.push_str(&format!("     {}\n", doc.body));
    }
}

pub fn format_json(outcome: &SearchOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(documents: Vec<Document>, stats: Option<ResultStats>) -> SearchOutcome {
        SearchOutcome {
            search_term: "spotify".into(),
            requested_articles: 10,
            stats,
            documents,
        }
    }

    fn document() -> Document {
        Document {
            header: "Spotify raises prices".into(),
            summary: "Prices go up.".into(),
            body: "Spotify said on Monday. Users react!".into(),
            url: "https://news.example/spotify".into(),
            published: "2024-01-02T10:00:00+01:00".into(),
            source: "Example News".into(),
            language: "en".into(),
            country: "Norway".into(),
        }
    }

    #[test]
    fn empty_results_message() {
        let text = format_outcome(&outcome(vec![], None), false);
        assert!(text.contains("Search: spotify (10 requested)"));
        assert!(text.contains("No documents found in response."));
    }

    #[test]
    fn collapsed_row_shows_snippet_and_metadata() {
        let text = format_outcome(&outcome(vec![document()], None), false);
        assert!(text.contains("1. Spotify raises prices"));
        assert!(text.contains("Example News · 2024-01-02T10:00:00\n"));
        assert!(text.contains("Prices go up."));
        assert!(text.contains("[en] [Norway]"));
        assert!(text.contains("https://news.example/spotify"));
        assert!(!text.contains("Body:"));
    }

    #[test]
    fn expanded_row_lists_sentences() {
        let text = format_outcome(&outcome(vec![document()], None), true);
        assert!(text.contains("Body:"));
        assert!(text.contains("- Spotify said on Monday."));
        assert!(text.contains("- Users react!"));
    }

    #[test]
    fn single_sentence_body_is_one_block() {
        let doc = Document {
            body: "Just one sentence".into(),
            ..document()
        };
        let text = format_outcome(&outcome(vec![doc], None), true);
        assert!(text.contains("     Just one sentence\n"));
        assert!(!text.contains("- Just one sentence"));
    }

    #[test]
    fn missing_source_is_labelled() {
        let doc = Document {
            source: String::new(),
            published: String::new(),
            ..document()
        };
        let text = format_outcome(&outcome(vec![doc], None), false);
        assert!(text.contains("   Unknown source\n"));
    }

    #[test]
    fn stats_skip_absent_values_but_keep_zero() {
        let stats = ResultStats {
            document_count: Some(0),
            host: Some("search-1".into()),
            context: Some(String::new()),
            ..Default::default()
        };
        let text = format_outcome(&outcome(vec![], Some(stats)), false);
        assert!(text.contains("Documents: 0 | Host: search-1\n"));
        assert!(!text.contains("Count:"));
        assert!(!text.contains("Context"));
    }

    #[test]
    fn json_output_uses_canonical_fields() {
        let json = format_json(&outcome(vec![document()], None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["documents"][0]["header"], "Spotify raises prices");
        assert_eq!(value["searchterm"], "spotify");
        assert!(value.get("stats").is_none());
    }
}
