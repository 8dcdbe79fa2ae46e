// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: normalize once, score everything, sort by tier.
//!
//! This is the whole search engine for a catalogue of a few hundred records.
//! No index structures, no state between calls - each call scores every
//! record and sorts the survivors. For search-as-you-type over a list this
//! size, the linear scan is comfortably inside a frame budget; callers that
//! re-rank on every keystroke are responsible for their own debouncing.
//!
//! Guarantees:
//! - The output is a subset of the input, each record at most once.
//! - Records in the same tier keep their input order (stable by
//!   construction: the sort key includes the original index).
//! - Inputs are never mutated; calls are re-entrant and safe to run
//!   concurrently over the same list.

use crate::scoring::{compare_ranked, score_match, Ranked};
use crate::text::normalize;
use crate::types::Searchable;

/// Rank `records` against `raw_query`, best match first.
///
/// The empty (or whitespace-only) query means "no filter applied": every
/// record comes back in input order. Otherwise non-matching records are
/// dropped and the rest are sorted by `(tier, input position)`.
///
/// # Example
///
/// ```
/// use toolrank::{rank, Tool};
///
/// let tools = vec![
///     Tool { name: "Marena".into(), ..Default::default() },
///     Tool { name: "Arena".into(), ..Default::default() },
/// ];
///
/// let ranked = rank(&tools, "aren");
/// // Name prefix beats name substring, regardless of input order.
/// assert_eq!(ranked[0].name, "Arena");
/// assert_eq!(ranked[1].name, "Marena");
/// ```
pub fn rank<'a, R: Searchable>(records: &'a [R], raw_query: &str) -> Vec<&'a R> {
    let query = normalize(raw_query);
    if query.is_empty() {
        return records.iter().collect();
    }

    let mut ranked: Vec<Ranked<'a, R>> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            score_match(record, &query).map(|tier| Ranked {
                tier,
                index,
                record,
            })
        })
        .collect();

    // compare_ranked includes the original index, so the sort itself does
    // not need to be stable.
    ranked.sort_unstable_by(compare_ranked);
    ranked.into_iter().map(|item| item.record).collect()
}

/// Resolve a query to its single best candidate, or `None` if nothing
/// matches. Used to jump straight to a tool from the navigation search.
pub fn best_match<'a, R: Searchable>(records: &'a [R], raw_query: &str) -> Option<&'a R> {
    rank(records, raw_query).into_iter().next()
}

/// The top `limit` ranked records - the suggestion dropdown's view.
pub fn suggestions<'a, R: Searchable>(
    records: &'a [R],
    raw_query: &str,
    limit: usize,
) -> Vec<&'a R> {
    let mut ranked = rank(records, raw_query);
    ranked.truncate(limit);
    ranked
}
