//! Centralized error types.
//!
//! `AppError` aggregates the configuration and API errors with the form's
//! own validation failures, and maps each to a message fit for display.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The form input was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(ConfigError::Missing(names)) => {
                format!("Missing configuration: {}", names.join(", "))
            }
            AppError::Config(e @ ConfigError::EnvFile { .. }) => e.to_string(),
            AppError::Api(e) => match e {
                ApiError::HttpStatus { status: 401, .. } => {
                    "Authentication failed. Please check your email and API token.".to_string()
                }
                ApiError::HttpStatus { status: 403, .. } => {
                    "Access denied. You don't have permission to create issues in this project."
                        .to_string()
                }
                ApiError::HttpStatus { status: 404, .. } => {
                    "The JIRA endpoint was not found. Please check JIRA_BASE_URL.".to_string()
                }
                ApiError::HttpStatus { status: 429, .. } => {
                    "Too many requests. Please wait a moment and try again.".to_string()
                }
                ApiError::HttpStatus { status, message, .. } if *status >= 500 => {
                    format!("JIRA server error ({}): {}", status, message)
                }
                ApiError::HttpStatus { message, .. } => {
                    format!("JIRA rejected the issue: {}", message)
                }
                ApiError::Timeout(timeout) => {
                    format!("JIRA did not respond within {:?}.", timeout)
                }
                ApiError::Network(_) => {
                    "Connection failed. Please check your internet connection.".to_string()
                }
                ApiError::Decode(_) => {
                    "Unexpected response from JIRA. Please try again.".to_string()
                }
                ApiError::InvalidHeader(_) => {
                    "Your email or API token contains characters that cannot be sent.".to_string()
                }
            },
            AppError::Validation(msg) => msg.clone(),
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::Missing(_)) => {
                Some("Set the JIRA_* variables in your environment or in a .env file.")
            }
            AppError::Api(ApiError::HttpStatus { status: 401, .. }) => {
                Some("Check your API token at https://id.atlassian.com/manage-profile/security/api-tokens")
            }
            AppError::Api(ApiError::HttpStatus { status: 400, .. }) => {
                Some("Check the project key and issue type exist in JIRA.")
            }
            AppError::Api(ApiError::Network(_)) | AppError::Api(ApiError::Timeout(_)) => {
                Some("Check your internet connection and JIRA_BASE_URL.")
            }
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
