//! Configuration File Loading
//!
//! Handles loading and saving configuration files from various locations
//! with support for multiple formats and fallback mechanisms.

use super::Config;
use crate::error::{Error, Result};
use crate::filter::query::{compile_regex, SearchQuery};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory / file stem used in search paths
const APP_DIR: &str = "cardpane";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files (without extension)
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in lookup order
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    /// Human-readable format name
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    /// Guess the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader using the default search paths
    pub fn new() -> Self {
        Self::with_search_paths(Self::get_search_paths())
    }

    /// Create a loader that only looks in the given locations
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration from the default locations with default options
    pub fn load() -> Result<Config> {
        Self::new().load_with_options(LoadOptions::default())
    }

    /// Load configuration from this loader's search paths
    pub fn load_with_options(&mut self, options: LoadOptions) -> Result<Config> {
        if let Some((path, config)) = self.find_and_load_config() {
            if options.validate {
                validate_config(&config)?;
            }
            info!("Configuration loaded from {}", path.display());
            self.current_path = Some(path);
            return Ok(config);
        }

        if options.create_default {
            debug!("No configuration file found, using defaults");
            let config = Config::default();
            if options.validate {
                validate_config(&config)?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load and validate a specific configuration file
    pub fn load_from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let config = load_config_file(path, ConfigFormat::from_path(path))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to the current path or default location
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .current_path
            .clone()
            .unwrap_or_else(Self::get_default_config_path);

        self.save_to_path(config, &path)?;
        Ok(path)
    }

    /// Save configuration to a specific path, choosing the format by extension
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::ConfigSaveFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let format = ConfigFormat::from_path(path);
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                }
            })?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Find and load configuration from search paths
    ///
    /// Files that exist but fail to parse are skipped with a warning.
    fn find_and_load_config(&self) -> Option<(PathBuf, Config)> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());
                if !config_path.exists() {
                    continue;
                }

                match load_config_file(&config_path, *format) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => {
                        warn!(
                            "Failed to load config from {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }

        None
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR).join("config"));
        }

        // XDG config home fallback (for platforms that might set it)
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join(APP_DIR).join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{}", APP_DIR)));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(format!(".{}", APP_DIR)));
        }

        paths
    }

    /// Get the default configuration path
    fn get_default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Add a custom search path
    pub fn add_search_path(&mut self, path: PathBuf) {
        self.search_paths.push(path);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a specific configuration file in the given format
fn load_config_file(path: &Path, format: ConfigFormat) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let parsed: std::result::Result<Config, String> = match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| Error::ConfigParseFailed {
        format: format.name().to_string(),
        reason,
    })
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.logging.level.trim().is_empty() {
        return Err(Error::ConfigValidationFailed {
            field: "logging.level".to_string(),
            reason: "Log level cannot be empty".to_string(),
        });
    }

    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&config.logging.level) {
        return Err(Error::ConfigValidationFailed {
            field: "logging.level".to_string(),
            reason: format!("Invalid filter directive: {}", e),
        });
    }

    // A default regex query must compile; the pane would silently fall back otherwise
    if let SearchQuery::Regex { pattern, flags } = SearchQuery::parse(&config.filters.search_query)
    {
        if let Err(e) = compile_regex(&pattern, &flags) {
            return Err(Error::ConfigValidationFailed {
                field: "filters.search_query".to_string(),
                reason: e.to_string(),
            });
        }
    }

    Ok(())
}
