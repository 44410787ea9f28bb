//! Type definitions shared by the library and the CLI

mod runtime_config;

pub use runtime_config::{
    ListConfig, LoggingConfig, RetryPolicy, ThriceConfig, DEFAULT_MAX_ATTEMPTS, LOG_LEVELS,
};
