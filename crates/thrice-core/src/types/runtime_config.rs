//! Runtime configuration types
//!
//! These types define configuration that controls runtime behavior: the
//! retry ceiling used by the CLI, log verbosity and the list separator.

use serde::{Deserialize, Serialize};

use crate::convert::LIST_SEPARATOR;
use crate::error::{Error, Result};

/// Number of attempts made by `invoke_with_retry`
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Accepted values for `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThriceConfig {
    /// Retry policy used by `thrice run`
    #[serde(default)]
    pub retry: RetryPolicy,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Delimited list settings
    #[serde(default)]
    pub list: ListConfig,
}

impl ThriceConfig {
    /// Check values that serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

/// Retry policy for an operation
///
/// The only knob is the attempt ceiling. Attempts run back to back; there is
/// no delay between them. A ceiling of zero is rejected, so every policy
/// makes at least one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "RawRetryPolicy")]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    /// Create a policy with a custom attempt ceiling
    pub fn new(max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::invalid_config(
                "retry.max-attempts must be at least 1",
            ));
        }
        Ok(Self { max_attempts })
    }

    /// Maximum number of attempts, including the first one
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawRetryPolicy {
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
}

impl TryFrom<RawRetryPolicy> for RetryPolicy {
    type Error = Error;

    fn try_from(raw: RawRetryPolicy) -> Result<Self> {
        Self::new(raw.max_attempts)
    }
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Default level when no -v/-q flag is given
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include the module target in log lines
    #[serde(default)]
    pub show_target: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(Error::invalid_config(format!(
                "logging.level '{}' is not one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            )))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Delimited list settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListConfig {
    /// Separator used by `join` and `split`
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> char {
    LIST_SEPARATOR
}
