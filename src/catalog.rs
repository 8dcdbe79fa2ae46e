//! The tool catalogue: loading, faceted filtering, and directory views.
//!
//! A [`Catalog`] is the in-memory tool list behind the directory page. The
//! interesting logic lives in [`Catalog::query`], which runs the same
//! pipeline the directory UI does: facet filters first, then the selected
//! sort, then search ranking on top when a query is present. Search ranking
//! re-orders the sorted list, so within one match tier the selected sort
//! still shows through.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::search::rank;
use crate::types::Tool;

/// Errors from loading a catalogue. The ranking API itself is total and has
/// no error taxonomy; only I/O and parsing can fail.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading the catalogue file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The catalogue JSON did not parse as a list of tools.
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "failed to read catalogue {}: {}", path.display(), source)
            }
            CatalogError::Parse(source) => write!(f, "invalid catalogue JSON: {}", source),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        CatalogError::Parse(source)
    }
}

/// Conjunctive facet filters - every enabled facet must match.
#[derive(Debug, Clone, Default)]
pub struct FacetFilter {
    /// Restrict to one category (case-insensitive); `None` means all.
    pub category: Option<String>,
    pub free_only: bool,
    pub open_source_only: bool,
    pub web3_only: bool,
}

impl FacetFilter {
    fn matches(&self, tool: &Tool) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |wanted| tool.category.eq_ignore_ascii_case(wanted));

        category_ok
            && (!self.free_only || tool.free)
            && (!self.open_source_only || tool.open_source)
            && (!self.web3_only || tool.web3)
    }
}

/// Directory sort modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive alphabetical by name.
    Name,
    /// Descending id - later additions first.
    Newest,
    /// Descending feature score (open-source, free, web3 weights).
    #[default]
    Popular,
}

/// The "popular" sort weight. Web3 tools float highest, then open-source,
/// then free; the weights are additive.
fn feature_score(tool: &Tool) -> u32 {
    let mut score = 0;
    if tool.open_source {
        score += 3;
    }
    if tool.free {
        score += 2;
    }
    if tool.web3 {
        score += 4;
    }
    score
}

/// An immutable, ordered catalogue of tools.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Wrap an existing tool list. Insertion order is preserved and is the
    /// search tie-break order.
    pub fn new(tools: Vec<Tool>) -> Self {
        Catalog { tools }
    }

    /// Parse a catalogue from a JSON array of tools.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let tools: Vec<Tool> = serde_json::from_str(json)?;
        Ok(Catalog::new(tools))
    }

    /// Load a catalogue from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json_str(&json)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tools
            .iter()
            .map(|tool| tool.category.as_str())
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .collect()
    }

    /// The directory pipeline: facet-filter, sort, then search-rank.
    ///
    /// With an empty `search`, the result is the filtered list in `sort`
    /// order. With a query, the sorted list is re-ranked by match tier;
    /// ties within a tier keep the `sort` order, so e.g. two equal name
    /// prefix matches still come back alphabetically under
    /// [`SortKey::Name`].
    pub fn query(&self, filter: &FacetFilter, sort: SortKey, search: &str) -> Vec<&Tool> {
        let mut filtered: Vec<&Tool> = self
            .tools
            .iter()
            .filter(|tool| filter.matches(tool))
            .collect();

        match sort {
            SortKey::Name => {
                filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortKey::Newest => filtered.sort_by(|a, b| b.id.cmp(&a.id)),
            SortKey::Popular => {
                filtered.sort_by(|a, b| feature_score(b).cmp(&feature_score(a)));
            }
        }

        rank(&filtered, search).into_iter().copied().collect()
    }

    /// Tools grouped by category, categories in first-appearance order and
    /// tools in insertion order within each group. The directory's "All"
    /// view renders these sections.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&Tool>)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let members = self
                    .tools
                    .iter()
                    .filter(|tool| tool.category == category)
                    .collect();
                (category, members)
            })
            .collect()
    }
}
