//! Issue form state and submission.
//!
//! Holds what the user entered, validates it, and turns it into an
//! `IssuePayload`. Both the terminal form and the `create` command submit
//! through [`submit`].

use tracing::{info, instrument, warn};

use crate::api::{build_issue_payload, CreatedIssue, IssuePayload, IssueType, JiraClient};
use crate::error::{AppError, Result};

/// Issue types offered by the form, in display order.
pub const ISSUE_TYPES: [&str; 3] = ["Task", "Bug", "Story"];

/// Summary the form starts with.
pub const DEFAULT_SUMMARY: &str = "Example issue";

/// Description the form starts with.
pub const DEFAULT_DESCRIPTION: &str = "Detailed description here...";

/// Message shown when the summary is left empty.
pub const SUMMARY_REQUIRED: &str = "Summary is required.";

/// The values entered into the issue form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueForm {
    /// One-line summary.
    pub summary: String,
    /// Plain-text description.
    pub description: String,
    /// Chosen issue type, by name or numeric ID.
    pub issue_type: String,
}

impl Default for IssueForm {
    fn default() -> Self {
        Self {
            summary: DEFAULT_SUMMARY.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            issue_type: ISSUE_TYPES[0].to_string(),
        }
    }
}

impl IssueForm {
    /// Create a form with explicit values.
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            issue_type: issue_type.into(),
        }
    }

    /// Check the form can be submitted.
    ///
    /// Only the summary is required. A summary of only whitespace counts as
    /// present; JIRA decides whether it is acceptable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the summary is empty.
    pub fn validate(&self) -> Result<()> {
        if self.summary.is_empty() {
            return Err(AppError::validation(SUMMARY_REQUIRED));
        }
        Ok(())
    }

    /// Build the request body for this form.
    pub fn to_payload(&self, project_key: &str) -> IssuePayload {
        build_issue_payload(
            project_key,
            &self.summary,
            &self.description,
            IssueType::parse(&self.issue_type),
        )
    }
}

/// Validate the form and create the issue.
///
/// Validation happens before the payload is built, so an empty summary never
/// reaches the network.
///
/// # Errors
///
/// Returns `AppError::Validation` for an empty summary, or `AppError::Api`
/// if the request fails.
#[instrument(skip(client, form), fields(project = %project_key, issue_type = %form.issue_type))]
pub async fn submit(client: &JiraClient, project_key: &str, form: &IssueForm) -> Result<CreatedIssue> {
    if let Err(e) = form.validate() {
        warn!("Form rejected: {}", e);
        return Err(e);
    }

    let payload = form.to_payload(project_key);
    let issue = client.create_issue(&payload).await?;
    info!(key = %issue, "Submission succeeded");
    Ok(issue)
}

/// Text shown after a successful submission.
pub fn success_message(issue: &CreatedIssue) -> String {
    format!("Issue created: {}", issue)
}

/// Text shown after a failed submission.
pub fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Validation(msg) => msg.clone(),
        other => format!("Failed: {}", other),
    }
}
