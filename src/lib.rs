//! cardpane - state management for a list of code cards
//!
//! A card pairs a source snippet with the outputs it produced (plain text,
//! rich markup, or errors). This crate holds the logic of the component that
//! shows such cards: it filters them by a search query and by output type,
//! tracks which ones are selected, and keeps their display order.
//!
//! ## Module Organization
//!
//! - [`models`] - Value objects (Card, CardOutput, OutputCategory, TypeFilters)
//! - [`filter`] - Search query parsing and the card predicates
//! - [`pane`] - The component state: order, selection, visibility
//! - [`events`] - Host requests, decodable from JSON
//! - [`config`] - Configuration loading and validation
//! - [`logging`] - `tracing` subscriber bootstrap
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use cardpane::events::FilterUpdate;
//! use cardpane::models::{Card, CardOutput, TypeFilters};
//! use cardpane::CardPane;
//!
//! let mut pane = CardPane::new();
//! let plot = Card::new(1, "plot", "fig.show()", vec![CardOutput::new("text/html", "<div/>")]);
//! let crash = Card::new(2, "crash", "1 / 0", vec![CardOutput::new("error", "ZeroDivisionError")]);
//! pane.add_card(plot.clone());
//! pane.add_card(crash.clone());
//!
//! pane.update_filters(FilterUpdate::new("", TypeFilters::new(true, true, false)));
//! assert_eq!(pane.visible_cards_in_order(), vec![&plot]);
//!
//! pane.update_filters(FilterUpdate::new("/^1 /", TypeFilters::all()));
//! assert_eq!(pane.visible_cards_in_order(), vec![&crash]);
//! ```
//!
//! ## Threading
//!
//! The pane is plain owned data driven from a single event loop. Every
//! operation is synchronous; there are no locks or background tasks.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod logging;
pub mod models;
pub mod pane;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::Config;
pub use error::{Error, Result};
pub use events::{FilterUpdate, MoveDirection, PaneEvent};
pub use pane::CardPane;

/// The current version of cardpane from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging and create a pane from the default configuration
///
/// A configuration that fails to load or validate is reported and replaced
/// by defaults; this function only fails if the defaults themselves are
/// rejected.
pub fn init() -> Result<CardPane> {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            let config = Config::default();
            crate::config::loader::validate_config(&config)?;
            config
        }
    };

    Ok(init_from(config))
}

/// Initialize logging and create a pane from a specific configuration file
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be parsed, or fails
/// validation.
pub fn init_with_config(config_path: &std::path::Path) -> Result<CardPane> {
    let config = ConfigLoader::load_from_path(config_path).map_err(|e| {
        error!(
            "Failed to load configuration from {}: {}",
            config_path.display(),
            e
        );
        e
    })?;

    Ok(init_from(config))
}

fn init_from(config: Config) -> CardPane {
    if let Err(e) = logging::init_logging(&config.logging) {
        // Usually a host that installed its own subscriber
        debug!("Logging not initialized by {}: {}", NAME, e);
    }
    info!("{} v{} initialized", NAME, VERSION);
    CardPane::from_config(&config)
}

/// User-facing description of an error with remediation hints
pub fn describe_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => format!(
            "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the file path and permissions\n• Use default configuration",
            path.display(),
            reason
        ),
        Error::ConfigParseFailed { format, reason } => format!(
            "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Ensure file is valid {}",
            format, reason, format
        ),
        Error::ConfigValidationFailed { field, reason } => format!(
            "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Remove the field to use its default",
            field, reason
        ),
        Error::ConfigNotFound => {
            "Configuration Error: Config file not found\n\nTry:\n• Create a configuration file\n• Use default configuration".to_string()
        }
        Error::EventDecodeFailed { reason } => format!(
            "Event Error: {}\n\nTry:\n• Check the message has a valid \"type\" field\n• Check card keys are UUID strings",
            reason
        ),
        Error::Io(err) => format!(
            "I/O Error: {}\n\nTry:\n• Check file permissions\n• Ensure required directories exist",
            err
        ),
        _ => format!("Unexpected Error: {}", error),
    }
}
