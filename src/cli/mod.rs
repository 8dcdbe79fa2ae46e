// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toolrank command-line interface.
//!
//! Three subcommands: `search` to rank the catalogue against a query,
//! `list` to browse it with facet filters and a sort mode, and
//! `categories` to print the distinct category tags.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use toolrank::SortKey;

#[derive(Parser)]
#[command(
    name = "toolrank",
    about = "Search and browse an AI-tool catalogue",
    version
)]
pub struct Cli {
    /// Path to the catalogue JSON file (an array of tool records)
    #[arg(short, long, global = true, default_value = "tools.json")]
    pub catalog: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank tools against a query, best match first
    Search {
        /// The raw query; empty means "everything, catalogue order"
        query: String,

        /// Show at most this many results
        #[arg(short, long, default_value_t = 8)]
        limit: usize,

        /// Print only the single best match
        #[arg(long)]
        best: bool,
    },

    /// List the catalogue with facet filters
    List {
        /// Restrict to one category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Only free tools
        #[arg(long)]
        free: bool,

        /// Only open-source tools
        #[arg(long)]
        open_source: bool,

        /// Only web3 tools
        #[arg(long)]
        web3: bool,

        /// Sort mode
        #[arg(long, value_enum, default_value = "popular")]
        sort: SortArg,

        /// Re-rank the filtered list against a search query
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Print the distinct categories, one per line
    Categories,
}

/// Clap-facing mirror of [`SortKey`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Name,
    Newest,
    Popular,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Newest => SortKey::Newest,
            SortArg::Popular => SortKey::Popular,
        }
    }
}
