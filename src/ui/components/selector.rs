//! Single-choice selector component.
//!
//! Shows every option on one line with the selected one highlighted.
//! Left/right (or h/l) cycles through the options.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// A horizontal single-choice selector.
#[derive(Debug, Clone)]
pub struct Selector {
    /// The selectable options.
    options: Vec<String>,
    /// Index of the selected option.
    selected: usize,
}

impl Selector {
    /// Create a selector over `options` with the first one selected.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: 0,
        }
    }

    /// The selected option, if any.
    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// Index of the selected option.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select the option equal to `value`. Unknown values are ignored.
    pub fn select(&mut self, value: &str) {
        if let Some(idx) = self.options.iter().position(|o| o == value) {
            self.selected = idx;
        }
    }

    /// Select the next option, wrapping around.
    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Select the previous option, wrapping around.
    pub fn previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the selection changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        let before = self.selected;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.previous(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => self.next(),
            _ => return false,
        }
        before != self.selected
    }

    /// Render the selector with a label.
    pub fn render(&self, frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        let t = theme();

        let mut spans = Vec::with_capacity(self.options.len() * 2);
        for (idx, option) in self.options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            if idx == self.selected {
                spans.push(Span::styled(
                    format!("[{}]", option),
                    Style::default()
                        .fg(t.highlight)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", option),
                    Style::default().fg(t.muted),
                ));
            }
        }

        let (border_style, title_style) = if focused {
            (
                Style::default().fg(t.focus),
                Style::default().fg(t.focus).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(t.muted), Style::default().fg(t.fg))
        };

        let hint = if focused { " ←/→ " } else { "" };
        let block = Block::default()
            .title(Span::styled(format!(" {} ", label), title_style))
            .title_bottom(Line::from(Span::styled(hint, Style::default().fg(t.muted))))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
