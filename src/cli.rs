//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::form::ISSUE_TYPES;

#[derive(Debug, Parser)]
#[command(name = "jira-issue-form")]
#[command(about = "Create JIRA issues from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read settings from this file instead of `.env`
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// The command to run; the interactive form when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Form)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fill in and submit the issue form interactively
    Form,

    /// Create an issue without the interactive form
    Create(CreateArgs),

    /// Show the loaded settings and a sample request body
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CreateArgs {
    /// One-line summary
    #[arg(short, long)]
    pub summary: String,

    /// Plain-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Issue type name, or a numeric issue type ID
    #[arg(short = 't', long, default_value = ISSUE_TYPES[0])]
    pub issue_type: String,

    /// Project key, overriding JIRA_PROJECT_KEY
    #[arg(short, long)]
    pub project: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_form() {
        let cli = Cli::try_parse_from(["jira-issue-form"]).unwrap();
        assert_eq!(cli.command(), Command::Form);
        assert!(!cli.verbose);
        assert!(cli.env_file.is_none());
    }

    #[test]
    fn test_create_defaults() {
        let cli = Cli::try_parse_from(["jira-issue-form", "create", "--summary", "Broken build"])
            .unwrap();
        let Command::Create(args) = cli.command() else {
            panic!("expected create");
        };
        assert_eq!(args.summary, "Broken build");
        assert_eq!(args.description, "");
        assert_eq!(args.issue_type, "Task");
        assert!(args.project.is_none());
    }

    #[test]
    fn test_create_all_options() {
        let cli = Cli::try_parse_from([
            "jira-issue-form",
            "--env-file",
            "staging.env",
            "create",
            "-s",
            "Crash",
            "-d",
            "Steps",
            "-t",
            "10001",
            "-p",
            "SCRUM",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.env_file, Some(PathBuf::from("staging.env")));
        assert_eq!(
            cli.command(),
            Command::Create(CreateArgs {
                summary: "Crash".to_string(),
                description: "Steps".to_string(),
                issue_type: "10001".to_string(),
                project: Some("SCRUM".to_string()),
            })
        );
    }

    #[test]
    fn test_create_requires_summary() {
        assert!(Cli::try_parse_from(["jira-issue-form", "create"]).is_err());
    }

    #[test]
    fn test_check() {
        let cli = Cli::try_parse_from(["jira-issue-form", "check"]).unwrap();
        assert_eq!(cli.command(), Command::Check);
    }
}
