//! Whitespace normalization for extracted document text.
//!
//! All vendor patterns assume single-spaced text with single blank lines, so
//! this step must run before any matching. Applying it twice is a no-op.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref NEWLINE_RUNS: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Canonicalize whitespace in raw extracted text.
///
/// Replaces non-breaking spaces with ordinary spaces, collapses runs of
/// spaces/tabs to a single space, collapses runs of newlines to a single
/// newline, and trims the result. Empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let text = raw.replace('\u{00a0}', " ");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaces_and_tabs() {
        assert_eq!(normalize("a  b\t\tc \t d"), "a b c d");
    }

    #[test]
    fn test_collapses_newline_runs() {
        assert_eq!(normalize("a\n\n\nb\n\nc"), "a\nb\nc");
    }

    #[test]
    fn test_replaces_non_breaking_spaces() {
        let out = normalize("a\u{00a0}\u{00a0}b");
        assert_eq!(out, "a b");
        assert!(!out.contains('\u{00a0}'));
    }

    #[test]
    fn test_trims_and_handles_empty() {
        assert_eq!(normalize("  \n hello \n "), "hello");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let raw = "  Booking\u{00a0}ID \t 12345\n\n\nCheck in   Nov 12, 2025  ";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
        assert!(!once.contains("  "));
        assert!(!once.contains("\n\n"));
    }
}
