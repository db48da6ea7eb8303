//! Primitive normalizers shared by every section transformer.
//!
//! All functions here are pure and total: absent or empty text is treated
//! as an empty string, never as an error.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

lazy_static! {
    /// A blank line: newline, optional horizontal whitespace, newline.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\r?\n[ \t]*\r?\n").unwrap();
}

/// Look up `value` in a keyed table, falling back to the entry under
/// `fallback_key` when the value is absent or unknown.
///
/// Returns `None` only if the table has no entry for `fallback_key` either.
pub fn default_label<'t, V>(
    value: Option<&str>,
    table: &'t [(&'static str, V)],
    fallback_key: &str,
) -> Option<&'t V> {
    let find = |key: &str| table.iter().find(|(k, _)| *k == key).map(|(_, v)| v);
    value.and_then(find).or_else(|| find(fallback_key))
}

/// Keep at most `max_len` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate(text: Option<&str>, max_len: usize) -> String {
    let text = text.unwrap_or_default();
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Convert a 0.0 - 1.0 fraction to a rounded 0 - 100 display value.
///
/// Out-of-range input is passed through unchecked.
pub fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// Split free text into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Make an underscore-separated token readable: `product_launch` -> `product launch`.
pub fn humanize_token(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Treat empty strings the same as missing ones.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, &str)] = &[("high", "Likely"), ("medium", "Possible"), ("low", "Emerging")];

    #[test]
    fn test_default_label_hit_and_fallback() {
        assert_eq!(default_label(Some("high"), TABLE, "low"), Some(&"Likely"));
        assert_eq!(default_label(Some("extreme"), TABLE, "low"), Some(&"Emerging"));
        assert_eq!(default_label(None, TABLE, "low"), Some(&"Emerging"));
        assert_eq!(default_label(None, TABLE, "missing"), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(Some("short"), 40), "short");
        assert_eq!(truncate(Some("abcdef"), 3), "abc...");
        assert_eq!(truncate(Some("abc"), 3), "abc");
        assert_eq!(truncate(None, 10), "");
        assert_eq!(truncate(Some(""), 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate(Some("héllo wörld"), 5), "héllo...");
        assert_eq!(truncate(Some("⚖️⚖️"), 10), "⚖️⚖️");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(0.846), 85);
        assert_eq!(percent(0.5), 50);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(0.004), 0);
    }

    #[test]
    fn test_split_paragraphs() {
        let text = "First para.\n\n  Second para.  \n \n\n\nThird\nstill third.";
        assert_eq!(
            split_paragraphs(text),
            vec!["First para.", "Second para.", "Third\nstill third."]
        );
        assert!(split_paragraphs("   \n\n  ").is_empty());
        assert_eq!(split_paragraphs("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_humanize_token_replaces_every_underscore() {
        assert_eq!(humanize_token("product_launch"), "product launch");
        assert_eq!(humanize_token("a_b_c"), "a b c");
        assert_eq!(humanize_token("funding"), "funding");
    }
}
