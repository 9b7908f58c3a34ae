//! Marker scanner
//!
//! Extracts every distinct `{{ ... }}` placeholder from the input text and
//! builds the working set of variables to resolve.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Matches `{{ ... }}` lazily so adjacent markers are not merged into one.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(.+?)\}\}").expect("marker pattern is valid"));

/// One placeholder to resolve and substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The exact matched text of the first occurrence, delimiters and
    /// internal whitespace included. This is the literal string the
    /// substitution step searches for.
    pub original_text: String,
    /// The escaped value fetched from the environment; empty until the
    /// resolver runs.
    pub resolved_value: String,
}

/// Variables keyed by their whitespace-stripped name. Built once per run.
pub type VariableSet = HashMap<String, Variable>;

/// Scan `content` for markers and collect the variable set.
///
/// The key is the marker's inner text with all whitespace removed. The first
/// occurrence of a key is authoritative: later markers with the same stripped
/// key never update the set, even when their literal text differs. As a
/// consequence, `{{ A }}` followed by `{{A}}` yields one variable whose
/// `original_text` is `{{ A }}` only - the differently spaced second form is
/// left alone at substitution time. Known quirk, kept for compatibility with
/// the reference behavior.
///
/// Matching is purely textual. There is no nesting or escape syntax: the
/// first `}}` after a `{{` closes the marker.
pub fn scan(content: &str) -> VariableSet {
    let mut vars = VariableSet::new();

    for cap in MARKER.captures_iter(content) {
        let matched = &cap[0];
        let key: String = cap[1].chars().filter(|c| !c.is_whitespace()).collect();

        vars.entry(key).or_insert_with(|| Variable {
            original_text: matched.to_string(),
            resolved_value: String::new(),
        });
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_yields_empty_set() {
        assert!(scan("plain text without placeholders").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_single_marker() {
        let vars = scan("Hello {{NAME}}!");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["NAME"].original_text, "{{NAME}}");
        assert_eq!(vars["NAME"].resolved_value, "");
    }

    #[test]
    fn test_whitespace_stripped_from_key() {
        let vars = scan("{{  DB HOST\t}}");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["DBHOST"].original_text, "{{  DB HOST\t}}");
    }

    #[test]
    fn test_duplicate_key_keeps_first_original_text() {
        let vars = scan("{{ A }} and {{A}}");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["A"].original_text, "{{ A }}");
    }

    #[test]
    fn test_identical_markers_collapse() {
        let vars = scan("{{A}} and {{A}}");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["A"].original_text, "{{A}}");
    }

    #[test]
    fn test_adjacent_markers_not_merged() {
        // Lazy matching: the first }} closes the marker.
        let vars = scan("{{A}}{{B}}");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["A"].original_text, "{{A}}");
        assert_eq!(vars["B"].original_text, "{{B}}");
    }

    #[test]
    fn test_multiple_distinct_markers() {
        let vars = scan("{{HOST}}:{{PORT}}/{{PATH}}");
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_empty_braces_not_a_marker() {
        // The inner capture requires at least one character.
        assert!(scan("{{}}").is_empty());
    }

    #[test]
    fn test_unclosed_marker_ignored() {
        assert!(scan("{{DANGLING").is_empty());
    }
}
