// Copyright 2025-present Toolrank Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the toolrank CLI.
//!
//! Plain ANSI styling with the usual escape hatches: `NO_COLOR` wins, and
//! piped output stays uncolored via TTY detection.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a style if stdout is a TTY, otherwise return plain text
pub fn styled(style: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// The facet badges shown next to a tool, e.g. "[free] [open-source]".
pub fn badges(free: bool, open_source: bool, web3: bool) -> String {
    let mut parts = Vec::new();
    if free {
        parts.push(styled(GREEN, "[free]"));
    }
    if open_source {
        parts.push(styled(CYAN, "[open-source]"));
    }
    if web3 {
        parts.push(styled(YELLOW, "[web3]"));
    }
    parts.join(" ")
}
