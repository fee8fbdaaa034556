//! Configuration management for cardpane
//!
//! Initial filter state, pane behavior and logging settings. Every section
//! falls back to defaults when omitted, so an empty file is a valid config.
//!
//! ```toml
//! [filters]
//! search_query = ""
//!
//! [filters.type_filters]
//! text = true
//! rich = true
//! error = false
//!
//! [pane]
//! sync_on_structural_change = false
//!
//! [logging]
//! level = "info"
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::models::TypeFilters;

/// Main configuration structure for cardpane
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter state a new pane starts with
    pub filters: FilterDefaults,

    /// Pane behavior
    pub pane: PaneConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Initial search query and type filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    /// Raw search string; may be a `/pattern/flags` regex literal
    pub search_query: String,

    /// Enabled output categories
    pub type_filters: TypeFilters,
}

/// Pane behavior configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Prune stale entries and recompute visibility after add/delete
    pub sync_on_structural_change: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "info", "cardpane=debug"); `RUST_LOG` wins if set
    pub level: String,

    /// Include the event target in log lines
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}
