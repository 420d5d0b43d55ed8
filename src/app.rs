//! Main application state and event loop.
//!
//! Follows The Elm Architecture: events update `App`, and `App::render`
//! draws the current state. Submissions run on a background task and report
//! back through `ApiMessage`.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, trace};

use crate::api::JiraClient;
use crate::config::JiraConfig;
use crate::error::{AppError, Result};
use crate::events::{Event, EventHandler};
use crate::form::{self, IssueForm};
use crate::tasks::{ApiMessage, TaskSpawner};
use crate::ui::{Banner, CreateIssueAction, CreateIssueView, LoadingIndicator};

/// The current state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The user is filling in the form.
    #[default]
    Editing,
    /// A submission is in flight; form input is ignored.
    Submitting,
    /// The application is exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current state.
    state: AppState,
    /// The issue form.
    view: CreateIssueView,
    /// Spinner shown while submitting.
    loading: LoadingIndicator,
    /// Outcome of the last submission.
    banner: Option<Banner>,
    /// Connection settings.
    config: JiraConfig,
    /// The JIRA client, shared by every submission.
    client: JiraClient,
    /// Spawner for background submissions.
    tasks: TaskSpawner,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: JiraConfig, client: JiraClient, tasks: TaskSpawner) -> Self {
        debug!(project = %config.project_key, "Creating application instance");
        Self {
            state: AppState::Editing,
            view: CreateIssueView::new(),
            loading: LoadingIndicator::with_message("Creating issue..."),
            banner: None,
            config,
            client,
            tasks,
        }
    }

    /// The current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Exiting
    }

    /// The banner currently shown, if any.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether the spinner is running.
    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    /// Update state from a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.loading.tick(),
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Paste(text) => {
                if self.state == AppState::Editing {
                    self.view.handle_paste(&text);
                }
            }
            Event::Key(key) => {
                if self.state == AppState::Submitting {
                    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                        self.quit();
                    }
                    return;
                }

                match self.view.handle_input(key) {
                    Some(CreateIssueAction::Submit(form)) => self.submit(form),
                    Some(CreateIssueAction::Quit) => self.quit(),
                    None => {}
                }
            }
        }
    }

    /// Update state from a finished background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::IssueCreated(result) => {
                self.loading.stop();
                if self.state == AppState::Submitting {
                    self.state = AppState::Editing;
                }

                self.banner = Some(match result {
                    Ok(issue) => {
                        info!(key = %issue, "Issue created from form");
                        Banner::success(form::success_message(&issue))
                            .with_detail(issue.to_pretty_json())
                    }
                    Err(err) => {
                        let banner = Banner::error(form::failure_message(&err));
                        match err.suggested_action() {
                            Some(action) => banner.with_detail(action),
                            None => banner,
                        }
                    }
                });
            }
        }
    }

    /// Validate the form and start a submission.
    fn submit(&mut self, form: IssueForm) {
        if self.state == AppState::Submitting {
            return;
        }

        if let Err(err) = form.validate() {
            debug!("Form rejected: {}", err);
            self.banner = Some(Banner::error(form::failure_message(&err)));
            return;
        }

        info!(issue_type = %form.issue_type, "Submitting issue form");
        self.banner = None;
        self.loading.start();
        self.state = AppState::Submitting;
        self.tasks.spawn_create_issue(&self.client, self.config.project_key.clone(), form);
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.state = AppState::Exiting;
    }

    /// Header line describing where issues go.
    fn header(&self) -> String {
        let target = if self.config.base_url.is_empty() {
            "JIRA_BASE_URL not set"
        } else {
            self.client.base_url()
        };
        format!("Project {} on {}", self.config.project_key, target)
    }

    /// Render the application.
    pub fn render(&mut self, frame: &mut Frame) {
        let header = self.header();
        let area = frame.area();
        self.view
            .render(frame, area, &header, &self.loading, self.banner.as_ref());
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive form until the user quits.
///
/// # Errors
///
/// Returns `AppError::Terminal` if the terminal cannot be set up or drawn.
pub async fn run(config: JiraConfig, client: JiraClient) -> Result<()> {
    let (tasks, rx) = TaskSpawner::channel();
    let app = App::new(config, client, tasks);

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, app, rx).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Tui,
    mut app: App,
    mut rx: UnboundedReceiver<ApiMessage>,
) -> Result<()> {
    let events = EventHandler::new();

    while !app.should_quit() {
        terminal
            .draw(|frame| app.render(frame))
            .map_err(|e| AppError::terminal(format!("failed to draw: {}", e)))?;

        // Polling blocks for at most one tick; submissions run on other workers
        let event = tokio::task::block_in_place(|| events.next())?;
        app.handle_event(event);

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()
        .map_err(|e| AppError::terminal(format!("failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .map_err(|e| AppError::terminal(format!("failed to enter alternate screen: {}", e)))?;
    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| AppError::terminal(format!("failed to create terminal: {}", e)))
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
