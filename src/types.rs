// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalogue.
//!
//! [`Tool`] is one listing in the AI-tool directory. [`Searchable`] is the
//! four-field view the scorer reads - name, handle, category, description -
//! so ranking works for any caller-supplied record shape, not just [`Tool`].
//!
//! # Invariants
//!
//! - Records are read-only inputs to each ranking call; nothing here is
//!   mutated by search, and no state survives between calls.
//! - Insertion order of a tool list is significant: it is the tie-break for
//!   records that land in the same match tier.

use serde::{Deserialize, Deserializer, Serialize};

/// The four text fields the scorer reads, in priority order.
///
/// `rank` and `best_match` are generic over this trait, so callers with
/// richer record types only need to expose these accessors. Missing values
/// should be surfaced as `""`, never as a panic.
pub trait Searchable {
    /// Primary display label.
    fn name(&self) -> &str;
    /// Short identifier/alias, e.g. "openwebui".
    fn handle(&self) -> &str;
    /// Classification tag, free text.
    fn category(&self) -> &str;
    /// Longer free-text description; last-resort match field.
    fn description(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn handle(&self) -> &str {
        (**self).handle()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

/// One AI-tool listing in the catalogue.
///
/// Field names follow the catalogue's JSON (camelCase). Absent or `null`
/// text fields deserialize to the empty string rather than failing, since
/// catalogue data comes from loosely validated submission forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Stable numeric id; also the "newest" sort key (higher = newer).
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub handle: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub website: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub category: String,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub open_source: bool,
    #[serde(default)]
    pub web3: bool,
    #[serde(default)]
    pub blockchain: bool,
    #[serde(default)]
    pub privacy: bool,
    #[serde(default)]
    pub verified: bool,
}

impl Searchable for Tool {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self) -> &str {
        &self.handle
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Deserialize `null` (or an absent field, via `#[serde(default)]`) as `""`.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
