//! Create issue view.
//!
//! The form a user fills to create an issue: summary, issue type and
//! description, followed by a submit button. Focus moves with Tab and
//! Shift+Tab.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::{IssueForm, DEFAULT_DESCRIPTION, DEFAULT_SUMMARY, ISSUE_TYPES};
use crate::ui::components::{Banner, LoadingIndicator, Selector, TextEditor, TextInput};
use crate::ui::theme::theme;

/// The focusable fields of the form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The summary input.
    #[default]
    Summary,
    /// The issue type selector.
    IssueType,
    /// The description editor.
    Description,
    /// The submit button.
    Submit,
}

impl FormField {
    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormField::Summary => FormField::IssueType,
            FormField::IssueType => FormField::Description,
            FormField::Description => FormField::Submit,
            FormField::Submit => FormField::Summary,
        }
    }

    /// The field before this one, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            FormField::Summary => FormField::Submit,
            FormField::IssueType => FormField::Summary,
            FormField::Description => FormField::IssueType,
            FormField::Submit => FormField::Description,
        }
    }
}

/// Actions returned from the create issue view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateIssueAction {
    /// Submit the form with the current values.
    Submit(IssueForm),
    /// Leave the application.
    Quit,
}

/// The create issue form.
pub struct CreateIssueView {
    /// Summary text input.
    summary_input: TextInput,
    /// Issue type selector.
    issue_type_selector: Selector,
    /// Description text editor.
    description_editor: TextEditor,
    /// The focused field.
    focus: FormField,
}

impl Default for CreateIssueView {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateIssueView {
    /// Create the view with the default form values.
    pub fn new() -> Self {
        let mut summary_input = TextInput::with_value(DEFAULT_SUMMARY);
        summary_input.set_placeholder("Enter issue summary...");

        Self {
            summary_input,
            issue_type_selector: Selector::new(ISSUE_TYPES),
            description_editor: TextEditor::new(DEFAULT_DESCRIPTION),
            focus: FormField::default(),
        }
    }

    /// The focused field.
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// The values currently entered.
    pub fn form(&self) -> IssueForm {
        IssueForm::new(
            self.summary_input.value(),
            self.description_editor.content(),
            self.issue_type_selector.selected().unwrap_or(ISSUE_TYPES[0]),
        )
    }

    /// Handle keyboard input.
    ///
    /// Returns an optional action to be handled by the parent.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<CreateIssueAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                Some(CreateIssueAction::Quit)
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                Some(CreateIssueAction::Submit(self.form()))
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.focus = self.focus.next();
                None
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.focus = self.focus.prev();
                None
            }
            (KeyCode::Enter, KeyModifiers::NONE) if self.focus == FormField::Submit => {
                Some(CreateIssueAction::Submit(self.form()))
            }
            // Enter inserts a newline in the description and advances elsewhere
            (KeyCode::Enter, KeyModifiers::NONE) if self.focus != FormField::Description => {
                self.focus = self.focus.next();
                None
            }
            _ => {
                self.handle_field_input(key);
                None
            }
        }
    }

    /// Handle input for the focused field.
    fn handle_field_input(&mut self, key: KeyEvent) {
        match self.focus {
            FormField::Summary => {
                self.summary_input.handle_input(key);
            }
            FormField::IssueType => {
                self.issue_type_selector.handle_input(key);
            }
            FormField::Description => {
                self.description_editor.handle_input(key);
            }
            FormField::Submit => {}
        }
    }

    /// Insert pasted text into the focused text field.
    pub fn handle_paste(&mut self, text: &str) {
        match self.focus {
            FormField::Summary => self.summary_input.insert_str(text),
            FormField::Description => self.description_editor.insert_str(text),
            FormField::IssueType | FormField::Submit => {}
        }
    }

    /// Render the form as a centered dialog.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        header: &str,
        loading: &LoadingIndicator,
        banner: Option<&Banner>,
    ) {
        let t = theme();
        let dialog_width = 80u16.min(area.width.saturating_sub(2));
        let dialog_height = 34u16.min(area.height.saturating_sub(2));
        let dialog_area = centered_rect(area, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(
                " Create JIRA Issue ",
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Summary
                Constraint::Length(3), // Issue Type
                Constraint::Min(5),    // Description
                Constraint::Length(1), // Submit button
                Constraint::Length(1), // Spinner
                Constraint::Length(8), // Result banner
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(header, Style::default().fg(t.muted))),
            chunks[0],
        );

        self.summary_input.render_with_label(
            frame,
            chunks[1],
            "Summary",
            self.focus == FormField::Summary,
        );
        self.issue_type_selector.render(
            frame,
            chunks[2],
            "Issue Type",
            self.focus == FormField::IssueType,
        );
        self.description_editor.render(
            frame,
            chunks[3],
            "Description",
            self.focus == FormField::Description,
        );

        self.render_submit_button(frame, chunks[4], loading.is_active());
        loading.render(frame, chunks[5]);

        if let Some(banner) = banner {
            banner.render(frame, chunks[6]);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Tab: next field  Shift+Tab: previous  Ctrl+S: submit  Esc: quit",
                Style::default().fg(t.muted),
            )))
            .alignment(Alignment::Center),
            chunks[7],
        );
    }

    /// Render the submit button.
    fn render_submit_button(&self, frame: &mut Frame, area: Rect, submitting: bool) {
        let t = theme();
        let focused = self.focus == FormField::Submit;

        let button_style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(t.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.success)
        };

        let button_text = if submitting {
            " Creating... "
        } else {
            " [Enter] Create Issue "
        };

        frame.render_widget(
            Paragraph::new(Span::styled(button_text, button_style)).alignment(Alignment::Center),
            area,
        );
    }
}

/// Calculate a centered rectangle within the given area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
