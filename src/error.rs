//! Error types and Result aliases for cardpane

use std::path::PathBuf;

/// Result type alias for cardpane operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cardpane
///
/// Pane operations themselves never fail; these errors come from the
/// surfaces around the pane (configuration, event decoding, direction parsing).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save configuration file
    #[error("Failed to save config to '{}': {reason}", path.display())]
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === Pane errors ===
    /// Move direction other than "up" or "down"
    #[error("Invalid move direction '{direction}' (expected \"up\" or \"down\")")]
    InvalidDirection { direction: String },

    /// Flag character not understood in a `/pattern/flags` query
    #[error("Unsupported regex flag '{flag}' in query")]
    UnsupportedRegexFlag { flag: char },

    /// Flag character given more than once in a `/pattern/flags` query
    #[error("Duplicate regex flag '{flag}' in query")]
    DuplicateRegexFlag { flag: char },

    /// Host event could not be decoded
    #[error("Failed to decode pane event: {reason}")]
    EventDecodeFailed { reason: String },

    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {reason}")]
    LoggingInitFailed { reason: String },

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Regex compilation errors
    #[error("Regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
