//! Per-category output filters

use serde::{Deserialize, Serialize};

use crate::models::OutputCategory;

/// Which output categories are currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeFilters {
    /// Show cards with plain text output
    pub text: bool,
    /// Show cards with rich output
    pub rich: bool,
    /// Show cards with error output
    pub error: bool,
}

impl Default for TypeFilters {
    fn default() -> Self {
        Self::all()
    }
}

impl TypeFilters {
    /// Every category enabled
    pub const fn all() -> Self {
        Self {
            text: true,
            rich: true,
            error: true,
        }
    }

    /// Every category disabled
    pub const fn none() -> Self {
        Self {
            text: false,
            rich: false,
            error: false,
        }
    }

    /// Create filters from explicit flags
    pub const fn new(text: bool, rich: bool, error: bool) -> Self {
        Self { text, rich, error }
    }

    /// Whether a category is enabled
    pub fn allows(&self, category: OutputCategory) -> bool {
        match category {
            OutputCategory::Text => self.text,
            OutputCategory::Rich => self.rich,
            OutputCategory::Error => self.error,
        }
    }

    /// Enable or disable a single category
    pub fn set(&mut self, category: OutputCategory, enabled: bool) {
        match category {
            OutputCategory::Text => self.text = enabled,
            OutputCategory::Rich => self.rich = enabled,
            OutputCategory::Error => self.error = enabled,
        }
    }

    /// True when no category is enabled
    pub fn is_none(&self) -> bool {
        !(self.text || self.rich || self.error)
    }
}
