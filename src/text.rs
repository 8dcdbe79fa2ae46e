//! Text normalization for search comparisons.
//!
//! Three canonical forms, each used by a different tier of the scorer:
//!
//! - [`normalize`]: lowercase, diacritics stripped, whitespace collapsed.
//!   Used for the empty-query check and whole-query word-prefix matching.
//! - [`compact`]: like `normalize`, but every non-alphanumeric character is
//!   removed outright. Prefix and substring tiers compare compacted text so
//!   that "open-webui", "Open WebUI", and "openwebui" are the same string.
//! - [`words`]: the token view - maximal runs of alphanumerics, lowercased.
//!   Used for word-prefix and multi-token matching.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, collapse whitespace.
///
/// This enables matching between ASCII and accented spellings:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace (also trims)
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact a string for prefix/substring comparison: normalize, then keep
/// only ASCII letters and digits. No separator survives, so comparisons are
/// insensitive to punctuation and spacing.
///
/// - "Open WebUI" → "openwebui"
/// - "-arena-" → "arena"
/// - "" → ""
pub fn compact(value: &str) -> String {
    normalize(value)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Split a string into lowercase word tokens.
///
/// A token is a maximal run of ASCII alphanumerics after normalization;
/// everything else is a separator. Empty tokens are dropped, so any input
/// (including pure punctuation) yields a clean, possibly empty, list.
pub fn words(value: &str) -> Vec<String> {
    normalize(value)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    // This covers the most common combining diacritical marks
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
