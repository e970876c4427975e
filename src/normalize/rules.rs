use serde_json::Value;

use super::value::RawText;

#[derive(Debug, Clone, Copy)]
enum Accept {
    Text,
    /// Text, or an integer rendered in decimal (epoch timestamps).
    TextOrInteger,
}

/// One element of a field-fallback chain: a key path into a raw document and
/// the value shapes accepted there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    path: &'static [&'static str],
    accept: Accept,
}

const fn text(path: &'static [&'static str]) -> Rule {
    Rule {
        path,
        accept: Accept::Text,
    }
}

const fn text_or_integer(path: &'static [&'static str]) -> Rule {
    Rule {
        path,
        accept: Accept::TextOrInteger,
    }
}

pub(crate) const HEADER: &[Rule] = &[
    text(&["header", "text"]),
    text(&["header"]),
    text(&["title"]),
    text(&["headline"]),
    text(&["url_common"]),
];

pub(crate) const SUMMARY: &[Rule] = &[
    text(&["summary", "text"]),
    text(&["summary"]),
    text(&["caption", "text"]),
];

pub(crate) const BODY: &[Rule] = &[
    text(&["body", "text"]),
    text(&["body"]),
    text(&["text"]),
    text(&["main", "text"]),
];

pub(crate) const URL: &[Rule] = &[
    text(&["url"]),
    text(&["orig_url"]),
    text(&["first_source", "url"]),
];

pub(crate) const PUBLISHED: &[Rule] = &[
    text(&["local_rcf822_time", "text"]),
    text(&["local_time", "text"]),
    text_or_integer(&["publicationdate"]),
    text_or_integer(&["unix_timestamp"]),
];

pub(crate) const SOURCE: &[Rule] = &[
    text(&["first_source", "sitename"]),
    text(&["first_source", "name"]),
    text(&["url_common"]),
];

pub(crate) const LANGUAGE: &[Rule] = &[
    text(&["language", "text"]),
    text(&["language", "encoding"]),
];

pub(crate) const COUNTRY: &[Rule] = &[text(&["countryname"]), text(&["countrycode"])];

impl Rule {
    fn apply(&self, item: &Value) -> Option<String> {
        let value = self.path.iter().try_fold(item, |v, key| v.get(*key))?;
        match (self.accept, value) {
            (Accept::TextOrInteger, Value::Number(n)) if n.is_i64() || n.is_u64() => {
                Some(n.to_string())
            }
            _ => RawText::decode(value)?.into_text(),
        }
    }
}

/// Walk a chain in order and return the first usable value.
pub(crate) fn resolve(item: &Value, chain: &[Rule]) -> Option<String> {
    chain.iter().find_map(|rule| rule.apply(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_usable_element_wins() {
        let item = json!({"title": "From title", "headline": "From headline"});
        assert_eq!(resolve(&item, HEADER).as_deref(), Some("From title"));
    }

    #[test]
    fn nested_text_beats_container() {
        let item = json!({"header": {"text": "Hello", "matches": "ignored"}});
        assert_eq!(resolve(&item, HEADER).as_deref(), Some("Hello"));
    }

    #[test]
    fn empty_primary_falls_through() {
        let item = json!({"summary": {"text": ""}, "caption": {"text": "Caption"}});
        assert_eq!(resolve(&item, SUMMARY).as_deref(), Some("Caption"));
    }

    #[test]
    fn wrong_typed_element_is_skipped() {
        let item = json!({"url": 17, "orig_url": "https://example.com/a"});
        assert_eq!(
            resolve(&item, URL).as_deref(),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn path_through_non_object_is_absent() {
        let item = json!({"first_source": "plain", "url_common": "example.com"});
        assert_eq!(resolve(&item, SOURCE).as_deref(), Some("example.com"));
    }

    #[test]
    fn integer_timestamp_is_rendered() {
        let item = json!({"unix_timestamp": 1_700_000_000});
        assert_eq!(resolve(&item, PUBLISHED).as_deref(), Some("1700000000"));
    }

    #[test]
    fn integer_is_not_text_elsewhere() {
        let item = json!({"countryname": 47, "countrycode": "NO"});
        assert_eq!(resolve(&item, COUNTRY).as_deref(), Some("NO"));
    }

    #[test]
    fn exhausted_chain_is_none() {
        assert!(resolve(&json!({}), LANGUAGE).is_none());
        assert!(resolve(&Value::Null, LANGUAGE).is_none());
    }
}
