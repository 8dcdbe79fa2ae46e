// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how matched records get sorted.
//!
//! Ranking is bucketed by match tier, never by any per-record weight. Within
//! a tier, the record that appeared earlier in the input list wins, so the
//! whole sort is deterministic regardless of the sort algorithm's own
//! stability guarantees.

use crate::scoring::MatchTier;
use std::cmp::Ordering;

/// A matched record with its sort keys, before the final projection.
///
/// Internal only: callers get back the records, not the tiers or indices.
pub(crate) struct Ranked<'a, R> {
    pub tier: MatchTier,
    pub index: usize,
    pub record: &'a R,
}

/// Compare two ranked records.
///
/// Sort order:
/// 1. **Match tier** - bucket hierarchy dominates (NamePrefix > ... > DescriptionSubstring)
/// 2. **Original index** - input position, for determinism within a tier
///
/// A name-prefix match that appeared last in the input still beats a
/// description match that appeared first. Tiers are impermeable.
pub(crate) fn compare_ranked<R>(a: &Ranked<'_, R>, b: &Ranked<'_, R>) -> Ordering {
    match a.tier.cmp(&b.tier) {
        Ordering::Equal => a.index.cmp(&b.index),
        ord => ord,
    }
}
