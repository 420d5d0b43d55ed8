//! Theme and styling configuration.

use ratatui::style::Color;

/// Color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Borders, titles and placeholders of unfocused fields.
    pub muted: Color,
    /// Border of the focused field.
    pub focus: Color,
    /// Dialog frame and spinner.
    pub accent: Color,
    /// The selected option in a selector.
    pub highlight: Color,
    /// Success banner.
    pub success: Color,
    /// Error banner.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

static DEFAULT_THEME: Theme = Theme {
    fg: Color::White,
    muted: Color::DarkGray,
    focus: Color::Yellow,
    accent: Color::Cyan,
    highlight: Color::Cyan,
    success: Color::Green,
    error: Color::Red,
};

/// The active theme.
pub fn theme() -> &'static Theme {
    &DEFAULT_THEME
}
