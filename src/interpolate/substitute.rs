//! Substitution engine
//!
//! Replaces every literal occurrence of each variable's original marker text
//! with its resolved value.

use super::scanner::VariableSet;

/// Produce the interpolated output from the original content and a fully
/// resolved variable set.
///
/// This is plain substring replacement, not pattern matching: every
/// occurrence of each variable's `original_text` anywhere in the content is
/// replaced, and the output is never re-scanned, so a resolved value that
/// itself contains marker-like text stays as-is. Iteration order does not
/// affect the result because the `original_text` values are distinct
/// literals.
pub fn substitute(content: &str, vars: &VariableSet) -> String {
    let mut output = content.to_string();

    for var in vars.values() {
        output = output.replace(&var.original_text, &var.resolved_value);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::scanner::Variable;
    use std::collections::HashMap;

    fn var_set(entries: &[(&str, &str, &str)]) -> VariableSet {
        entries
            .iter()
            .map(|(key, original, resolved)| {
                (
                    key.to_string(),
                    Variable {
                        original_text: original.to_string(),
                        resolved_value: resolved.to_string(),
                    },
                )
            })
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let vars = var_set(&[("A", "{{A}}", "x")]);
        assert_eq!(substitute("{{A}} and {{A}}", &vars), "x and x");
    }

    #[test]
    fn test_replaces_multiple_variables() {
        let vars = var_set(&[("HOST", "{{HOST}}", "db.internal"), ("PORT", "{{PORT}}", "5432")]);
        assert_eq!(
            substitute("{{HOST}}:{{PORT}}", &vars),
            "db.internal:5432"
        );
    }

    #[test]
    fn test_only_exact_literal_text_is_replaced() {
        // Dedup collapsed {{ A }} and {{A}} to one variable keyed off the
        // first literal form; the second spelling stays in the output.
        let vars = var_set(&[("A", "{{ A }}", "x")]);
        assert_eq!(substitute("{{ A }} and {{A}}", &vars), "x and {{A}}");
    }

    #[test]
    fn test_no_recursive_interpolation() {
        let vars = var_set(&[("A", "{{A}}", "{{B}}")]);
        assert_eq!(substitute("{{A}}", &vars), "{{B}}");
    }

    #[test]
    fn test_empty_set_is_identity() {
        let vars = VariableSet::new();
        assert_eq!(substitute("untouched {{X}}", &vars), "untouched {{X}}");
    }

    #[test]
    fn test_replacement_is_literal_not_pattern() {
        // Regex metacharacters in the marker text have no special meaning.
        let vars = var_set(&[("A.B", "{{A.B}}", "v")]);
        assert_eq!(substitute("{{A.B}} AxB", &vars), "v AxB");
    }
}
