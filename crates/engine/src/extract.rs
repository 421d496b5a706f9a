//! Lexical `key: value` extraction.
//!
//! This is deliberately a single regular expression over raw text, not a
//! parser. Nested literals and values that wrap onto the next line are only
//! matched as far as the pattern reaches:
//!
//! ```text
//! a: {b: 1}   =>  ("a", "")  ("b", "1")
//! ```

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier, optional whitespace, `:`, optional whitespace, then a run of
/// anything except `,` `{` `}` and newline.
const PAIR_PATTERN: &str = r"[A-Za-z0-9_]+\s*:\s*[^,{}\n]+";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPair {
    pub key: String,
    pub value: String,
}

impl ExtractedPair {
    /// Split a raw match at its first colon. Colons inside the value are kept.
    fn from_match(raw: &str) -> Option<Self> {
        let (key, value) = raw.split_once(':')?;
        Some(Self {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        })
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(&self.value)
    }
}

impl fmt::Display for ExtractedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Number of maximal non-whitespace runs in `value`.
#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: Regex,
}

impl Extractor {
    /// # Errors
    /// Returns an error if the pair pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(PAIR_PATTERN)?,
        })
    }

    /// All non-overlapping pairs in order of appearance.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<ExtractedPair> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| ExtractedPair::from_match(m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        Extractor::new()
            .unwrap()
            .extract(text)
            .into_iter()
            .map(|p| (p.key, p.value))
            .collect()
    }

    fn owned(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn splits_on_commas() {
        assert_eq!(
            pairs("name: John, age: 30"),
            owned(&[("name", "John"), ("age", "30")])
        );
    }

    #[test]
    fn keeps_colons_inside_values() {
        assert_eq!(
            pairs("note: hello : world, x: 1"),
            owned(&[("note", "hello : world"), ("x", "1")])
        );
        assert_eq!(
            pairs("url: http://example.com/a"),
            owned(&[("url", "http://example.com/a")])
        );
    }

    #[test]
    fn nested_object_is_matched_piecewise() {
        assert_eq!(pairs("a: {b: 1}"), owned(&[("a", ""), ("b", "1")]));
    }

    #[test]
    fn values_stop_at_line_end() {
        let text = "const config = {\n  host: 'localhost',\n  port: 8080\n};\n";
        assert_eq!(
            pairs(text),
            owned(&[("host", "'localhost'"), ("port", "8080")])
        );
    }

    #[test]
    fn whitespace_around_colon_is_trimmed() {
        assert_eq!(pairs("key   :   spaced out  "), owned(&[("key", "spaced out")]));
    }

    #[test]
    fn no_matches_yields_nothing() {
        assert!(pairs("").is_empty());
        assert!(pairs("function f() { return 1; }").is_empty());
        assert!(pairs(": value without key").is_empty());
    }

    #[test]
    fn word_count_of_values() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \t "), 0);
        assert_eq!(word_count("  a   b  c "), 3);
        assert_eq!(word_count("bar baz"), 2);
    }

    #[test]
    fn display_is_key_colon_value() {
        let pair = ExtractedPair {
            key: "foo".into(),
            value: "bar baz".into(),
        };
        assert_eq!(pair.to_string(), "foo: bar baz");
        assert_eq!(pair.word_count(), 2);
    }
}
