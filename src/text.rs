//! Text normalization applied to scraped fields.
//!
//! The normalization is deliberately lossy: every non-ASCII codepoint is
//! dropped (not transliterated), so non-English channel names and titles
//! lose characters. Downstream consumers depend on this exact behavior,
//! so it must not be "improved".

/// Drop every non-ASCII character from the string.
pub fn ascii_clean(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii()).collect()
}

/// Normalization for comment authors and bodies: ASCII-only with embedded
/// line breaks removed.
pub fn comment_clean(s: &str) -> String {
    ascii_clean(s).replace('\n', "")
}

/// Remove every occurrence of a boilerplate label such as `" subscribers"`
/// or `" views"`. A replace rather than a suffix strip, matching the
/// output consumers expect.
pub fn strip_label(s: &str, label: &str) -> String {
    s.replace(label, "")
}
