//! Configuration loading

mod loader;

pub use loader::{
    ConfigLoader, CONFIG_FILE_NAME, ENV_LIST_SEPARATOR, ENV_LOG_LEVEL, ENV_MAX_ATTEMPTS,
};
