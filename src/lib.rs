//! jira-issue-form: create JIRA issues from a terminal form.
//!
//! The library holds everything the binary needs so the HTTP client and
//! commands can be exercised from integration tests.

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod logging;
pub mod tasks;
pub mod ui;

pub use api::{build_auth_headers, build_issue_payload, ApiError, CreatedIssue, JiraClient};
pub use config::JiraConfig;
pub use error::{AppError, Result};
