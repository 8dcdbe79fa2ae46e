// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! The tier ladder: how a record matches a query.
//!
//! Scoring is bucketed, not weighted. The first rule that fires decides the
//! tier, and a better tier always beats a worse one no matter how "strong"
//! the worse match looks. A name prefix beats a handle prefix beats a
//! category prefix, and every prefix tier beats every substring tier.
//!
//! Tier hierarchy: NamePrefix > NameWordPrefix > HandlePrefix >
//! CategoryPrefix > TokenPrefixes > NameSubstring > HandleSubstring >
//! CategorySubstring > DescriptionSubstring
//!
//! Queries shorter than two characters never reach the substring tiers.
//! Without that guard, typing the first letter of a search floods the
//! results with every record whose description happens to contain it.

use crate::text::{compact, words};
use crate::types::Searchable;

/// The bucket a record matched in. Lower tier = better match.
///
/// The derived `Ord` follows declaration order, so sorting a result list by
/// tier ranks name prefixes first and description substrings last. The
/// numeric value is a sort key only; it is never shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Compacted name starts with the compacted query.
    NamePrefix = 0,
    /// Some word of the name starts with the whole normalized query.
    NameWordPrefix = 1,
    /// Compacted handle starts with the compacted query.
    HandlePrefix = 2,
    /// Compacted category starts with the compacted query.
    CategoryPrefix = 3,
    /// Every query token prefixes some word of name/handle/category.
    TokenPrefixes = 4,
    /// Compacted name contains the compacted query.
    NameSubstring = 5,
    /// Compacted handle contains the compacted query.
    HandleSubstring = 6,
    /// Compacted category contains the compacted query.
    CategorySubstring = 7,
    /// Compacted description contains the compacted query.
    DescriptionSubstring = 8,
}

impl MatchTier {
    /// The tier as a small integer rank class (0 = best).
    pub fn rank_class(self) -> u8 {
        self as u8
    }
}

/// Score one record against a normalized query.
///
/// `query` must already be passed through [`crate::text::normalize`]; the
/// ranker does this once per call rather than once per record. The empty
/// query is the caller's special case ("no filter applied") and must not
/// reach this function.
///
/// Returns the first tier in the ladder that matches, or `None`. A miss is
/// an ordinary outcome, not an error.
///
/// # Example
///
/// ```
/// use toolrank::{score_match, MatchTier, Tool};
///
/// let tool = Tool { name: "LM Arena".into(), ..Default::default() };
/// assert_eq!(score_match(&tool, "lm"), Some(MatchTier::NamePrefix));
/// assert_eq!(score_match(&tool, "arena"), Some(MatchTier::NameWordPrefix));
/// assert_eq!(score_match(&tool, "zzz"), None);
/// ```
pub fn score_match<R: Searchable>(record: &R, query: &str) -> Option<MatchTier> {
    let compact_query = compact(query);
    let tokens = words(query);

    let compact_name = compact(record.name());
    let name_words = words(record.name());

    // Strongest signals first: "a", "aa", etc. should prioritize
    // starts-with behavior.
    if compact_name.starts_with(&compact_query) {
        return Some(MatchTier::NamePrefix);
    }
    if name_words.iter().any(|word| word.starts_with(query)) {
        return Some(MatchTier::NameWordPrefix);
    }

    let compact_handle = compact(record.handle());
    if compact_handle.starts_with(&compact_query) {
        return Some(MatchTier::HandlePrefix);
    }

    let compact_category = compact(record.category());
    if compact_category.starts_with(&compact_query) {
        return Some(MatchTier::CategoryPrefix);
    }

    if !tokens.is_empty() {
        let mut primary_words = name_words;
        primary_words.extend(words(record.handle()));
        primary_words.extend(words(record.category()));
        if tokens
            .iter()
            .all(|token| primary_words.iter().any(|word| word.starts_with(token)))
        {
            return Some(MatchTier::TokenPrefixes);
        }
    }

    // Short queries never fall through to substring matching.
    if query.chars().count() < 2 {
        return None;
    }

    // Fallback broad matching for longer queries.
    if compact_name.contains(&compact_query) {
        return Some(MatchTier::NameSubstring);
    }
    if compact_handle.contains(&compact_query) {
        return Some(MatchTier::HandleSubstring);
    }
    if compact_category.contains(&compact_query) {
        return Some(MatchTier::CategorySubstring);
    }
    if compact(record.description()).contains(&compact_query) {
        return Some(MatchTier::DescriptionSubstring);
    }

    None
}
