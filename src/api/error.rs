//! API error types for JIRA client.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when creating an issue through the JIRA API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within the client timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Network or HTTP transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JIRA answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The numeric status code.
        status: u16,
        /// A readable summary, taken from JIRA's error fields when present.
        message: String,
        /// The raw response body.
        body: String,
    },

    /// A success response whose body could not be parsed.
    #[error("Invalid API response: {0}")]
    Decode(String),

    /// A request header could not be encoded.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Build an `HttpStatus` error from a status code and response body.
    ///
    /// JIRA usually returns `{"errorMessages": [...], "errors": {...}}`;
    /// both are folded into `message`. `fallback` is used when the body
    /// carries neither.
    pub fn from_response(status: reqwest::StatusCode, body: &str, fallback: &str) -> Self {
        let message = jira_error_message(body).unwrap_or_else(|| {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            format!("{} ({})", reason, fallback)
        });

        ApiError::HttpStatus {
            status: status.as_u16(),
            message,
            body: body.to_string(),
        }
    }

    /// The HTTP status code, if this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Whether the server refused access to the project or operation.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Whether the server rejected the payload itself.
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }
}

/// Extract JIRA's error text from a response body.
///
/// Returns `None` if the body is not JSON or carries no error fields.
fn jira_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let mut parts: Vec<String> = Vec::new();

    if let Some(messages) = json.get("errorMessages").and_then(|m| m.as_array()) {
        parts.extend(messages.iter().filter_map(|v| v.as_str()).map(String::from));
    }

    if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
        parts.extend(errors.iter().map(|(field, value)| match value.as_str() {
            Some(text) => format!("{}: {}", field, text),
            None => format!("{}: {}", field, value),
        }));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
