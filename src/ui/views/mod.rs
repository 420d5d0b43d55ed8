//! Application views.

mod create_issue;

pub use create_issue::{CreateIssueAction, CreateIssueView, FormField};
