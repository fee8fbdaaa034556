//! Card Output Model
//!
//! One output artifact recorded for a card, tagged with a mime type, and the
//! three-way category derived from that mime type for filtering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mime types that classify as plain text
const TEXT_MIME_TYPES: [&str; 2] = ["stdout", "text/plain"];

/// Mime type that classifies as an error
const ERROR_MIME_TYPE: &str = "error";

/// Filtering category of a card output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputCategory {
    /// Plain text (`stdout`, `text/plain`), also used for cards with no output
    Text,
    /// Rich or markup output (any mime type that is not text or error)
    Rich,
    /// Error output
    Error,
}

impl OutputCategory {
    /// All categories, in filter order
    pub const ALL: [OutputCategory; 3] = [Self::Text, Self::Rich, Self::Error];

    /// Classify a mime type
    pub fn from_mime_type(mime_type: &str) -> Self {
        if TEXT_MIME_TYPES.contains(&mime_type) {
            Self::Text
        } else if mime_type == ERROR_MIME_TYPE {
            Self::Error
        } else {
            Self::Rich
        }
    }

    /// Lowercase name, as used in type filter records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rich => "rich",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single output of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardOutput {
    /// Mime type, e.g. "stdout", "text/plain", "error", "text/html"
    pub mime_type: String,

    /// Raw payload
    pub value: String,
}

impl CardOutput {
    /// Create a new card output
    pub fn new(mime_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            value: value.into(),
        }
    }

    /// Category of this output
    pub fn category(&self) -> OutputCategory {
        OutputCategory::from_mime_type(&self.mime_type)
    }
}
