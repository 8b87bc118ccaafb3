#![forbid(unsafe_code)]

//! Quick-search highlighting.
//!
//! The server list highlights the part of a name or map that matches the
//! search box. Matching is ASCII case-insensitive; non-ASCII bytes must match
//! exactly. Because ASCII lowering never changes byte lengths, match offsets
//! are valid byte offsets (and char boundaries) into the original string.
//!
//! # Example
//! ```
//! use sbui_text::search::highlight;
//!
//! let h = highlight("Teeworlds Server", "WORLD");
//! assert_eq!(h.prefix, "Tee");
//! assert_eq!(h.matched, "world");
//! assert_eq!(h.suffix, "s Server");
//! ```

use std::ops::Range;

/// Find the first ASCII case-insensitive occurrence of `needle`.
///
/// Returns `None` for an empty needle or one longer than the haystack.
#[must_use]
pub fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || pat.len() > hay.len() {
        return None;
    }
    hay.windows(pat.len())
        .position(|w| w.eq_ignore_ascii_case(pat))
        .map(|start| start..start + pat.len())
}

/// How a span should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    /// Regular text color.
    Normal,
    /// Highlight color.
    Emphasis,
}

/// A string split around its first search match.
///
/// Without a match, `prefix` and `matched` are empty and `suffix` holds the
/// whole string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    /// Text before the match.
    pub prefix: &'a str,
    /// The match itself, in the haystack's original case.
    pub matched: &'a str,
    /// Text after the match.
    pub suffix: &'a str,
}

impl<'a> Highlight<'a> {
    /// A highlight with no match.
    #[must_use]
    pub const fn none(text: &'a str) -> Self {
        Self {
            prefix: "",
            matched: "",
            suffix: text,
        }
    }

    /// Whether the needle was found.
    #[inline]
    #[must_use]
    pub const fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }

    /// Byte length of the prefix.
    #[inline]
    #[must_use]
    pub const fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    /// Non-empty spans in draw order.
    pub fn spans(&self) -> impl Iterator<Item = (&'a str, SpanStyle)> {
        [
            (self.prefix, SpanStyle::Normal),
            (self.matched, SpanStyle::Emphasis),
            (self.suffix, SpanStyle::Normal),
        ]
        .into_iter()
        .filter(|(text, _)| !text.is_empty())
    }
}

/// Split `haystack` around the first case-insensitive match of `needle`.
#[must_use]
pub fn highlight<'a>(haystack: &'a str, needle: &str) -> Highlight<'a> {
    match find_ascii_case_insensitive(haystack, needle) {
        Some(range) => Highlight {
            prefix: &haystack[..range.start],
            matched: &haystack[range.clone()],
            suffix: &haystack[range.end..],
        },
        None => Highlight::none(haystack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_first_match() {
        let h = highlight("Teeworlds Server", "world");
        assert_eq!(h.prefix, "Tee");
        assert_eq!(h.matched, "world");
        assert_eq!(h.suffix, "s Server");
        assert_eq!(h.prefix_len(), 3);
        assert!(h.is_match());
    }

    #[test]
    fn empty_needle_is_no_match() {
        let h = highlight("abc", "");
        assert!(!h.is_match());
        assert_eq!(h, Highlight::none("abc"));
        assert_eq!(h.suffix, "abc");
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert_eq!(find_ascii_case_insensitive("ab", "abc"), None);
        assert!(!highlight("ab", "abc").is_match());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(find_ascii_case_insensitive("ABC", "b"), Some(1..2));
        let h = highlight("ABC", "b");
        assert_eq!(h.matched, "B");
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(find_ascii_case_insensitive("dm1 dm2", "DM"), Some(0..2));
    }

    #[test]
    fn non_ascii_is_matched_exactly() {
        let h = highlight("Größe ctf", "CTF");
        assert_eq!(h.prefix, "Größe ");
        assert_eq!(h.matched, "ctf");
        assert_eq!(find_ascii_case_insensitive("GRÖSSE", "ö"), None);
    }

    #[test]
    fn spans_skip_empty_parts() {
        let spans: Vec<_> = highlight("ctf5", "CTF").spans().collect();
        assert_eq!(
            spans,
            vec![("ctf", SpanStyle::Emphasis), ("5", SpanStyle::Normal)]
        );
        let plain: Vec<_> = highlight("dm1", "x").spans().collect();
        assert_eq!(plain, vec![("dm1", SpanStyle::Normal)]);
    }
}
