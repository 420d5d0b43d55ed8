//! JIRA connection settings.

use std::fmt;
use std::path::Path;

use tracing::debug;

use super::{ConfigError, Result};

/// Environment variable holding the JIRA instance URL.
pub const ENV_BASE_URL: &str = "JIRA_BASE_URL";
/// Environment variable holding the account email.
pub const ENV_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";
/// Environment variable holding the project key for new issues.
pub const ENV_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";

/// Project key used when `JIRA_PROJECT_KEY` is unset.
pub const DEFAULT_PROJECT_KEY: &str = "DEMO";

/// Connection settings for a JIRA Cloud instance.
///
/// Unset variables become empty strings (or `DEFAULT_PROJECT_KEY`); nothing
/// is validated on load. Call [`JiraConfig::validate`] where incomplete
/// settings must be refused.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
    /// The JIRA instance URL, e.g. "https://company.atlassian.net".
    pub base_url: String,
    /// The account email used for Basic Auth.
    pub email: String,
    /// The API token used for Basic Auth.
    pub api_token: String,
    /// The key of the project new issues are created in.
    pub project_key: String,
}

impl JiraConfig {
    /// Load settings from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is read first if
    /// present. Variables already set in the environment take precedence.
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Load settings, reading variables from `env_file` first.
    ///
    /// Falls back to [`JiraConfig::load`] when no file is given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if the given file cannot be read or
    /// parsed.
    pub fn load_with_env_file(env_file: Option<&Path>) -> Result<Self> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                debug!(path = %path.display(), "Loaded env file");
                Ok(Self::from_env())
            }
            None => Ok(Self::load()),
        }
    }

    /// Read settings from the process environment only.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup(ENV_BASE_URL).unwrap_or_default(),
            email: lookup(ENV_EMAIL).unwrap_or_default(),
            api_token: lookup(ENV_API_TOKEN).unwrap_or_default(),
            project_key: lookup(ENV_PROJECT_KEY)
                .unwrap_or_else(|| DEFAULT_PROJECT_KEY.to_string()),
        }
    }

    /// Return a copy with a different project key.
    pub fn with_project_key(mut self, project_key: impl Into<String>) -> Self {
        self.project_key = project_key.into();
        self
    }

    /// Names of the environment variables whose values are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (ENV_BASE_URL, &self.base_url),
            (ENV_EMAIL, &self.email),
            (ENV_API_TOKEN, &self.api_token),
            (ENV_PROJECT_KEY, &self.project_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Check that every setting is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` listing each empty setting.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &token)
            .field("project_key", &self.project_key)
            .finish()
    }
}
