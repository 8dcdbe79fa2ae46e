//! Tiered search ranking for an AI-tool catalogue.
//!
//! This crate is the search core of a tool directory: a few hundred records,
//! each with a name, a handle, a category, and a description, ranked against
//! a raw query string typed into a search box. Matching is bucketed into
//! tiers (name prefix down to description substring), and a better tier
//! always wins - there is no weighted scoring to tune.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  text.rs   │────▶│   scoring/    │────▶│   search/    │
//! │ (normalize,│     │ (score_match, │     │ (rank,       │
//! │  compact,  │     │  MatchTier)   │     │  best_match) │
//! │  words)    │     └───────────────┘     └──────────────┘
//! └────────────┘                                  │
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │  catalog.rs  │
//!                                          │ (facets,     │
//!                                          │  sorts,      │
//!                                          │  grouping)   │
//!                                          └──────────────┘
//! ```
//!
//! Ranking is a pure function: no index structures, no state between calls,
//! no I/O. The output is always a subset of the input in a deterministic
//! order - tier first, then input position.
//!
//! # Usage
//!
//! ```
//! use toolrank::{rank, Tool};
//!
//! let tools = vec![
//!     Tool { name: "LM Arena".into(), ..Default::default() },
//!     Tool { name: "Ollama".into(), ..Default::default() },
//!     Tool { name: "Jan".into(), ..Default::default() },
//! ];
//!
//! let hits = rank(&tools, "j");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Jan");
//! ```

pub mod catalog;
mod scoring;
mod search;
mod text;
mod types;

// Re-exports for public API
pub use catalog::{Catalog, CatalogError, FacetFilter, SortKey};
pub use scoring::{score_match, MatchTier};
pub use search::{best_match, rank, suggestions};
pub use text::{compact, normalize, words};
pub use types::{Searchable, Tool};
