//! Result banner component.
//!
//! Shows the outcome of the last submission under the form. Unlike a toast
//! it stays until the next submission, so the created issue's JSON can be
//! read at leisure.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// The kind of banner, which determines its appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// The issue was created.
    Success,
    /// Submission failed or was rejected.
    Error,
}

impl BannerKind {
    /// Get the icon for this banner kind.
    pub fn icon(&self) -> &'static str {
        match self {
            BannerKind::Success => "✓",
            BannerKind::Error => "✗",
        }
    }

    /// Get the color for this banner kind.
    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            BannerKind::Success => t.success,
            BannerKind::Error => t.error,
        }
    }
}

/// A persistent message with optional detail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// The banner kind.
    pub kind: BannerKind,
    /// The headline.
    pub message: String,
    /// Extra lines shown under the headline.
    pub detail: Option<String>,
}

impl Banner {
    /// Create a success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            detail: None,
        }
    }

    /// Create an error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Render the banner in the given area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.kind.color());

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} ", self.kind.icon()),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message.as_str(), style.add_modifier(Modifier::BOLD)),
        ])];

        if let Some(detail) = &self.detail {
            lines.extend(
                detail
                    .lines()
                    .map(|l| Line::from(Span::styled(l, Style::default().fg(theme().fg)))),
            );
        }

        let block = Block::default().borders(Borders::ALL).border_style(style);

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}
