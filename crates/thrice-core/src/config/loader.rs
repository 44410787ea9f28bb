//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Config file (`--config <path>`, or ~/.config/thrice/config.yaml when present)
//! 3. Environment variables (THRICE_* prefix)
//! 4. CLI flags (handled by caller)

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{RetryPolicy, ThriceConfig};

/// File name looked up inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Overrides `retry.max-attempts`
pub const ENV_MAX_ATTEMPTS: &str = "THRICE_MAX_ATTEMPTS";

/// Overrides `logging.level`
pub const ENV_LOG_LEVEL: &str = "THRICE_LOG_LEVEL";

/// Overrides `list.separator`
pub const ENV_LIST_SEPARATOR: &str = "THRICE_LIST_SEPARATOR";

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directory holding the global config file, if one could be determined
    config_dir: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader using the standard config directory (~/.config/thrice)
    pub fn new() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
        }
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
        }
    }

    /// Get the standard config directory
    ///
    /// Prefers the HOME environment variable over `dirs::home_dir()` so that
    /// an overridden HOME is respected.
    fn default_config_dir() -> Option<Utf8PathBuf> {
        let home = env::var("HOME")
            .map(std::path::PathBuf::from)
            .ok()
            .or_else(dirs::home_dir)?;

        Utf8PathBuf::from_path_buf(home)
            .ok()
            .map(|home| home.join(".config").join("thrice"))
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> Option<&Utf8Path> {
        self.config_dir.as_deref()
    }

    /// Path of the global config file
    pub fn default_config_path(&self) -> Option<Utf8PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration with hierarchical precedence
    ///
    /// An explicit path must exist; the global file is optional.
    pub fn load(&self, explicit: Option<&Utf8Path>) -> Result<ThriceConfig> {
        let mut config = ThriceConfig::default();

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                config = self.load_yaml_file(path)?;
            }
            None => {
                if let Some(path) = self.default_config_path().filter(|p| p.exists()) {
                    config = self.load_yaml_file(&path)?;
                }
            }
        }

        config = self.apply_env_overrides(config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        debug!(path = %path, "loading config file");
        let content = fs::read_to_string(path)?;
        let config: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: ThriceConfig) -> Result<ThriceConfig> {
        if let Ok(val) = env::var(ENV_MAX_ATTEMPTS) {
            let attempts = val.parse().map_err(|_| {
                Error::invalid_config(format!("{} must be a valid number", ENV_MAX_ATTEMPTS))
            })?;
            config.retry = RetryPolicy::new(attempts)?;
        }

        if let Ok(val) = env::var(ENV_LOG_LEVEL) {
            config.logging.level = val;
        }

        if let Ok(val) = env::var(ENV_LIST_SEPARATOR) {
            config.list.separator = val.parse().map_err(|_| {
                Error::invalid_config(format!(
                    "{} must be a single character",
                    ENV_LIST_SEPARATOR
                ))
            })?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
