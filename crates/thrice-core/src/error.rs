//! Error types for thrice-core

use thiserror::Error;

/// Result type alias using thrice-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for thrice
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A list item could not be parsed into the requested type
    #[error("Cannot parse list item '{item}': {message}")]
    ParseItem { item: String, message: String },

    /// Slice index outside of the slice bounds
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Tuple column outside of 0..=2
    #[error("Column {column} is out of range, expected 0, 1 or 2")]
    ColumnOutOfRange { column: usize },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a list item parse error
    pub fn parse_item(item: impl Into<String>, message: impl ToString) -> Self {
        Self::ParseItem {
            item: item.into(),
            message: message.to_string(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a column out of range error
    pub fn column_out_of_range(column: usize) -> Self {
        Self::ColumnOutOfRange { column }
    }
}
