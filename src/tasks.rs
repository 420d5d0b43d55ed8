//! Background submission for the terminal form.
//!
//! The request runs on a tokio task so the event loop keeps drawing the
//! spinner. The result comes back over an unbounded channel that the event
//! loop polls with `try_recv()` on every tick.

use tokio::sync::mpsc;

use crate::api::{CreatedIssue, JiraClient};
use crate::error::AppError;
use crate::form::{self, IssueForm};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// Issue creation finished.
    IssueCreated(Result<CreatedIssue, AppError>),
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Create a spawner together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ApiMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Spawn a task that submits `form` to JIRA.
    pub fn spawn_create_issue(&self, client: &JiraClient, project_key: String, form: IssueForm) {
        let tx = self.tx.clone();
        let client = client.clone();
        tokio::spawn(async move {
            let result = form::submit(&client, &project_key, &form).await;
            let _ = tx.send(ApiMessage::IssueCreated(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JiraConfig;

    #[tokio::test]
    async fn test_spawn_create_issue_reports_result() {
        let config = JiraConfig::default();
        let client = JiraClient::new(&config).unwrap();
        let (spawner, mut rx) = TaskSpawner::channel();

        spawner.spawn_create_issue(&client, "SCRUM".to_string(), IssueForm::new("", "", "Task"));

        match rx.recv().await {
            Some(ApiMessage::IssueCreated(Err(AppError::Validation(_)))) => {}
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }
}
