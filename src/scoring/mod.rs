// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! Match scoring: which tier a record lands in for a given query.

mod ranking;
mod tiers;

pub(crate) use ranking::{compare_ranked, Ranked};
pub use tiers::{score_match, MatchTier};
