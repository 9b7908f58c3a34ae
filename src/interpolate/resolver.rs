//! Environment resolver
//!
//! Fills in the resolved value of every scanned variable from the
//! environment, trying the primary-prefixed name first and falling back to
//! the alternative-prefixed name, then escaping the raw value for literal
//! embedding.

use std::fmt::Write as _;

use tracing::trace;

use super::scanner::VariableSet;
use crate::env::EnvLookup;
use crate::error::Error;

/// Resolve every variable in `vars` or fail the whole run.
///
/// Per variable `key`, the lookup names are `<primary_prefix>_<key>` and
/// `<alternative_prefix>_<key>`, tried in that order. A variable that is set
/// to the empty string counts as unset. If neither name yields a value the
/// run fails with [`Error::UnresolvedVariable`] naming both attempted keys;
/// nothing is defaulted and nothing is skipped.
///
/// Empty prefixes are permitted and simply produce names like `_KEY`.
pub fn resolve(
    vars: &mut VariableSet,
    env: &dyn EnvLookup,
    primary_prefix: &str,
    alternative_prefix: &str,
) -> Result<(), Error> {
    for (key, var) in vars.iter_mut() {
        let primary_key = format!("{primary_prefix}_{key}");
        let alternative_key = format!("{alternative_prefix}_{key}");

        let raw = match env.get(&primary_key).filter(|v| !v.is_empty()) {
            Some(value) => {
                trace!(key = %key, lookup = %primary_key, "resolved via primary prefix");
                value
            }
            None => match env.get(&alternative_key).filter(|v| !v.is_empty()) {
                Some(value) => {
                    trace!(key = %key, lookup = %alternative_key, "resolved via alternative prefix");
                    value
                }
                None => {
                    return Err(Error::UnresolvedVariable {
                        primary_key,
                        alternative_key,
                    })
                }
            },
        };

        var.resolved_value = escape(&raw);
    }

    Ok(())
}

/// Escape a raw value for literal embedding: quote it as a string literal,
/// then strip exactly the outer quote characters.
///
/// Inner escape sequences stay in their textual form - a value containing a
/// real newline comes out containing the two characters `\n`. That is the
/// documented, compatibility-preserving behavior, not an oversight.
fn escape(raw: &str) -> String {
    let quoted = quote(raw);
    // quote() always brackets with ASCII double quotes, so byte slicing
    // cannot split a character.
    quoted[1..quoted.len() - 1].to_string()
}

/// Quote `raw` as a double-quoted string literal, escaping backslashes,
/// quote characters, and non-printable characters. Named escapes cover the
/// common controls; remaining ASCII non-printables become `\xNN`, other
/// non-printables `\uNNNN` or `\UNNNNNNNN`. Printable characters pass
/// through untouched.
fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            ch if is_print(ch) => out.push(ch),
            ch if ch.is_ascii() => {
                let _ = write!(out, "\\x{:02x}", ch as u32);
            }
            ch if (ch as u32) < 0x1_0000 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => {
                let _ = write!(out, "\\U{:08x}", ch as u32);
            }
        }
    }
    out.push('"');
    out
}

/// Printable here means letters, marks, numbers, punctuation, symbols, and
/// the ASCII space. Controls, non-ASCII separators (NBSP, line and
/// paragraph separators), format characters, and private-use characters all
/// count as non-printable and get escaped.
fn is_print(ch: char) -> bool {
    if ch.is_ascii() {
        return !ch.is_ascii_control();
    }
    !(ch.is_control() || ch.is_whitespace() || is_format(ch) || is_private_use(ch))
}

/// Format characters (soft hyphen, zero-width and bidi controls, BOM, and
/// the rest of general category Cf).
fn is_format(ch: char) -> bool {
    matches!(ch as u32,
        0xad
        | 0x600..=0x605 | 0x61c | 0x6dd | 0x70f | 0x890..=0x891 | 0x8e2
        | 0x180e
        | 0x200b..=0x200f | 0x202a..=0x202e | 0x2060..=0x2064 | 0x2066..=0x206f
        | 0xfeff | 0xfff9..=0xfffb
        | 0x110bd | 0x110cd | 0x13430..=0x1343f
        | 0x1bca0..=0x1bca3 | 0x1d173..=0x1d17a
        | 0xe0001 | 0xe0020..=0xe007f)
}

fn is_private_use(ch: char) -> bool {
    matches!(ch as u32, 0xe000..=0xf8ff | 0xf0000..=0xffffd | 0x100000..=0x10fffd)
}
