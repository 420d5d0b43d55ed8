//! JIRA API client implementation.
//!
//! This module provides the client for creating issues through the JIRA REST
//! API v3. Headers are computed once at construction; each call is a single
//! request with no retry.

use std::time::Duration;

use reqwest::{header::HeaderMap, Client, Response};
use tracing::{debug, error, info, instrument, warn};

use super::auth::build_auth_headers;
use super::error::{ApiError, Result};
use super::payload::IssuePayload;
use super::types::CreatedIssue;
use crate::config::JiraConfig;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the issue creation endpoint.
const CREATE_ISSUE_PATH: &str = "/rest/api/3/issue";

/// The JIRA API client.
///
/// Immutable after construction, so a single instance can serve every
/// submission of a session. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// The base URL for the JIRA instance, without trailing slashes.
    base_url: String,
    /// Headers sent with every request.
    headers: HeaderMap,
    /// Request timeout.
    timeout: Duration,
}

impl JiraClient {
    /// Create a new JIRA client from configuration.
    ///
    /// Does not contact the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the headers cannot be encoded or the HTTP client
    /// cannot be built.
    pub fn new(config: &JiraConfig) -> Result<Self> {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new JIRA client with a custom request timeout.
    pub fn with_timeout(config: &JiraConfig, timeout: Duration) -> Result<Self> {
        let headers = build_auth_headers(&config.email, &config.api_token).to_header_map()?;
        let client = Self::build_http_client(timeout)?;
        let base_url = normalize_base_url(&config.base_url);

        debug!(base_url = %base_url, "JIRA client created");

        Ok(Self {
            client,
            base_url,
            headers,
            timeout,
        })
    }

    /// Build the HTTP client with appropriate settings.
    fn build_http_client(timeout: Duration) -> Result<Client> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)
    }

    /// Create an issue.
    ///
    /// Calls `POST /rest/api/3/issue` once with `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// - `ApiError::Timeout` if no response arrives within the timeout
    /// - `ApiError::Network` for any other transport failure
    /// - `ApiError::HttpStatus` for a non-2xx response
    /// - `ApiError::Decode` if a 2xx body is not a valid creation response
    #[instrument(skip(self, payload), fields(
        project = %payload.fields.project.key,
        issue_type = %payload.fields.issue_type,
    ))]
    pub async fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue> {
        let url = self.issue_url();
        debug!(url = %url, "Creating issue");

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let issue: CreatedIssue = self.handle_response(response).await?;
        info!(key = %issue, "Issue created");
        Ok(issue)
    }

    /// Handle the HTTP response, checking for errors and parsing JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if status.is_success() {
            serde_json::from_str::<T>(&body).map_err(|e| {
                error!("Failed to parse response: {}", e);
                ApiError::Decode(format!("failed to parse response: {}", e))
            })
        } else {
            debug!("Error response body: {}", body);
            let err = ApiError::from_response(status, &body, &url);
            warn!("Issue creation rejected: {}", err);
            Err(err)
        }
    }

    /// Classify a transport failure.
    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            warn!("Request timed out after {:?}", self.timeout);
            ApiError::Timeout(self.timeout)
        } else {
            error!("Request failed: {}", err);
            ApiError::Network(err)
        }
    }

    /// The full URL of the issue creation endpoint.
    pub fn issue_url(&self) -> String {
        format!("{}{}", self.base_url, CREATE_ISSUE_PATH)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Normalize the base URL by removing trailing slashes.
///
/// Warns if the URL is not HTTPS, but does not enforce it for localhost.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    url.to_string()
}
