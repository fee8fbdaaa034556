//! Logging bootstrap
//!
//! Installs a compact `tracing-subscriber` formatter. `RUST_LOG` takes
//! precedence over the configured level, and `CARDPANE_DEBUG=1` (or `true`)
//! raises the configured level to `debug`.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Environment variable that forces debug logging
pub const DEBUG_ENV_VAR: &str = "CARDPANE_DEBUG";

/// Resolve the filter directive from the environment and configuration
pub fn resolve_filter(config: &LoggingConfig) -> String {
    if let Ok(directive) = env::var("RUST_LOG") {
        if !directive.trim().is_empty() {
            return directive;
        }
    }

    let debug = env::var(DEBUG_ENV_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if debug {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

/// Install the global subscriber
///
/// Fails if the directive is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let directive = resolve_filter(config);
    let filter = EnvFilter::try_new(&directive).map_err(|e| Error::LoggingInitFailed {
        reason: format!("invalid filter '{}': {}", directive, e),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| Error::LoggingInitFailed {
            reason: e.to_string(),
        })
}
