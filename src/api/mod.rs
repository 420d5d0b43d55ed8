//! JIRA API client and types.
//!
//! This module provides the interface for creating issues through the JIRA
//! REST API.

pub mod auth;
pub mod client;
pub mod error;
pub mod payload;
pub mod types;

pub use auth::{build_auth_headers, AuthHeaders};
pub use client::JiraClient;
pub use error::ApiError;
pub use payload::{build_issue_payload, IssuePayload, IssueType};
pub use types::{AtlassianDoc, CreatedIssue};
