//! Non-interactive commands.
//!
//! Each command writes its normal output to the given writer so it can be
//! checked in tests; errors are returned for `main` to report.

use std::io::Write;

use tracing::{info, instrument, warn};

use crate::api::{build_issue_payload, CreatedIssue, JiraClient};
use crate::cli::CreateArgs;
use crate::config::JiraConfig;
use crate::error::{AppError, Result};
use crate::form::{self, IssueForm};

// Sample issue printed by `check`
const SAMPLE_PROJECT_KEY: &str = "SCRUM";
const SAMPLE_SUMMARY: &str = "Test Issue";
const SAMPLE_DESCRIPTION: &str = "Test Description";
const SAMPLE_ISSUE_TYPE: &str = "Task";

/// Create one issue from command-line arguments.
///
/// # Errors
///
/// Returns `AppError::Config` if a setting is missing, `AppError::Validation`
/// for an empty summary, or `AppError::Api` if the request fails.
#[instrument(skip_all, fields(issue_type = %args.issue_type))]
pub async fn create<W: Write>(
    config: JiraConfig,
    args: CreateArgs,
    out: &mut W,
) -> Result<CreatedIssue> {
    let config = match args.project {
        Some(project) => config.with_project_key(project),
        None => config,
    };
    config.validate()?;

    let client = JiraClient::new(&config)?;
    let form = IssueForm::new(args.summary, args.description, args.issue_type);
    let issue = form::submit(&client, &config.project_key, &form).await?;

    writeln!(out, "{}", form::success_message(&issue))?;
    writeln!(out, "{}", issue.to_pretty_json())?;
    Ok(issue)
}

/// Report the loaded settings and print a sample request body.
///
/// # Errors
///
/// Returns `AppError::Config` listing the missing settings after the report
/// has been written.
#[instrument(skip_all)]
pub fn check<W: Write>(config: &JiraConfig, out: &mut W) -> Result<()> {
    writeln!(out, "Configuration: {:?}", config)?;

    let missing = config.missing_fields();
    if missing.is_empty() {
        writeln!(out, "All settings present.")?;
    } else {
        for name in &missing {
            writeln!(out, "Missing: {}", name)?;
        }
    }

    let client = JiraClient::new(config)?;
    writeln!(out, "Client ready: POST {}", client.issue_url())?;

    let payload = build_issue_payload(
        SAMPLE_PROJECT_KEY,
        SAMPLE_SUMMARY,
        SAMPLE_DESCRIPTION,
        SAMPLE_ISSUE_TYPE,
    );
    let json = payload
        .to_pretty_json()
        .map_err(|e| AppError::other(format!("failed to serialize payload: {}", e)))?;
    writeln!(out, "Sample payload:")?;
    writeln!(out, "{}", json)?;

    if missing.is_empty() {
        info!("Configuration check passed");
        Ok(())
    } else {
        warn!(missing = ?missing, "Configuration check failed");
        config.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn full_config() -> JiraConfig {
        JiraConfig {
            base_url: "https://example.atlassian.net".to_string(),
            email: "user@example.com".to_string(),
            api_token: "secret-token".to_string(),
            project_key: "SCRUM".to_string(),
        }
    }

    fn create_args(summary: &str) -> CreateArgs {
        CreateArgs {
            summary: summary.to_string(),
            description: "d".to_string(),
            issue_type: "Task".to_string(),
            project: None,
        }
    }

    #[test]
    fn test_check_with_full_config() {
        let mut out = Vec::new();
        check(&full_config(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("All settings present."));
        assert!(text.contains("POST https://example.atlassian.net/rest/api/3/issue"));
        assert!(text.contains("\"summary\": \"Test Issue\""));
        assert!(text.contains("\"key\": \"SCRUM\""));
        assert!(!text.contains("secret-token"));
    }

    #[test]
    fn test_check_lists_missing_settings() {
        let mut out = Vec::new();
        let err = check(&JiraConfig::default(), &mut out).unwrap_err();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Missing: JIRA_BASE_URL"));
        assert!(text.contains("Missing: JIRA_EMAIL"));
        assert!(text.contains("Missing: JIRA_API_TOKEN"));
        // The sample payload is still printed
        assert!(text.contains("\"text\": \"Test Description\""));
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Missing(ref names)) if names.len() == 3
        ));
    }

    #[tokio::test]
    async fn test_create_requires_config() {
        let mut out = Vec::new();
        let err = create(JiraConfig::default(), create_args("s"), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Missing(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_summary() {
        let mut out = Vec::new();
        let err = create(full_config(), create_args(""), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_project_override_fills_missing_key() {
        let config = JiraConfig {
            project_key: String::new(),
            base_url: "http://127.0.0.1:9".to_string(),
            ..full_config()
        };
        let mut args = create_args("s");
        args.project = Some("OPS".to_string());

        let mut out = Vec::new();
        let err = create(config, args, &mut out).await.unwrap_err();
        // Config passes with the override, so the failure comes from the network
        assert!(matches!(err, AppError::Api(_)));
    }
}
