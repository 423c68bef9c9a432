//! Extraction strategy selection.
//!
//! The two historical exporter variants (one keyword per declaration, and
//! explicit start/end block markers) are modeled as a single engine
//! parameterized by a [`Strategy`] value.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Strategy selector as it appears in config files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Single-keyword regions terminated by a blank line at zero brace depth.
    #[default]
    Keyword,
    /// Explicit start/end block markers; brace nesting is irrelevant.
    Markers,
}

/// Fully resolved extraction policy driving the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// A region starts at a line prefixed with `keyword` and ends at the
    /// next blank line outside braces. Occurrences of `extern_keyword` inside
    /// the region are replaced with `extern_replacement`.
    SingleKeyword {
        keyword: String,
        extern_keyword: String,
        extern_replacement: String,
    },
    /// A region spans from a `start`-prefixed line to an `end`-prefixed line.
    /// Content is emitted verbatim; marker lines themselves never are.
    BlockMarkers { start: String, end: String },
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::SingleKeyword { .. } => StrategyKind::Keyword,
            Strategy::BlockMarkers { .. } => StrategyKind::Markers,
        }
    }
}
