//! Configuration management.
//!
//! Connection settings are read once from the environment at start-up and
//! passed explicitly to whatever needs them.

mod settings;

use thiserror::Error;

pub use settings::{
    JiraConfig, DEFAULT_PROJECT_KEY, ENV_API_TOKEN, ENV_BASE_URL, ENV_EMAIL, ENV_PROJECT_KEY,
};

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required settings are empty.
    #[error("missing configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// An explicitly requested env file could not be read.
    #[error("could not load env file {path}: {message}")]
    EnvFile {
        /// The file that failed to load.
        path: String,
        /// Why it failed.
        message: String,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
