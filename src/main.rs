//! jira-issue-form - create JIRA issues from the terminal.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use jira_issue_form::{
    app,
    cli::{Cli, Command},
    commands, logging, AppError, JiraClient, JiraConfig,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The form still works without a log file
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = run(&cli).await;
    finish(result)
}

/// Report the outcome, then log the shutdown.
fn finish(result: jira_issue_form::Result<()>) -> ExitCode {
    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            report(&err);
            ExitCode::FAILURE
        }
    };
    logging::shutdown();
    code
}

async fn run(cli: &Cli) -> jira_issue_form::Result<()> {
    let config = JiraConfig::load_with_env_file(cli.env_file.as_deref())?;

    match cli.command() {
        Command::Form => {
            let client = JiraClient::new(&config)?;
            app::run(config, client).await
        }
        Command::Create(args) => {
            commands::create(config, args, &mut io::stdout()).await?;
            Ok(())
        }
        Command::Check => commands::check(&config, &mut io::stdout()),
    }
}

fn report(err: &AppError) {
    eprintln!("Error: {}", err.user_message());
    if let Some(action) = err.suggested_action() {
        eprintln!();
        eprintln!("{}", action);
    }
    if let Some(dir) = logging::log_directory() {
        eprintln!("Logs: {}", dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_log(result: jira_issue_form::Result<()>) -> String {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || SharedBuf(writer.clone()))
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            finish(result);
        });

        let bytes = buf.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_failure_logged_before_shutdown() {
        let log = captured_log(Err(AppError::other("boom")));
        let failed = log.find("Command failed").unwrap();
        let shutdown = log.find("shutting down").unwrap();
        assert!(failed < shutdown, "{}", log);
    }

    #[test]
    fn test_success_logs_shutdown_only() {
        let log = captured_log(Ok(()));
        assert!(!log.contains("Command failed"));
        assert!(log.contains("shutting down"));
    }
}
