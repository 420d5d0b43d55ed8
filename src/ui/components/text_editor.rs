//! Multi-line text editor component.
//!
//! Used for the issue description. Supports:
//! - Multi-line text editing
//! - Cursor movement (arrows, home/end)
//! - Scrolling for content longer than the visible area

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// A multi-line text editor component.
#[derive(Debug, Clone)]
pub struct TextEditor {
    /// Lines of text content.
    lines: Vec<String>,
    /// Current line (0-indexed).
    cursor_line: usize,
    /// Current column within the line, in characters.
    cursor_col: usize,
    /// Scroll offset (first visible line).
    scroll: usize,
}

impl TextEditor {
    /// Create a new text editor with the given content.
    ///
    /// The cursor starts at the end of the content.
    pub fn new(content: &str) -> Self {
        let lines: Vec<String> = content.split('\n').map(String::from).collect();
        let cursor_line = lines.len() - 1;
        let cursor_col = lines[cursor_line].chars().count();

        Self {
            lines,
            cursor_line,
            cursor_col,
            scroll: 0,
        }
    }

    /// Create an empty text editor.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the current content as a string.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Get the current cursor position as `(line, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    /// Byte offset of `col` within `line`.
    fn byte_index(&self, line: usize, col: usize) -> usize {
        let text = &self.lines[line];
        text.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }

    /// Ensure the cursor column is within bounds for the current line.
    fn clamp_cursor_col(&mut self) {
        self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_line));
    }

    /// Ensure the scroll position keeps the cursor visible.
    fn ensure_cursor_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor_line < self.scroll {
            self.scroll = self.cursor_line;
        }
        if self.cursor_line >= self.scroll + visible_height {
            self.scroll = self.cursor_line - visible_height + 1;
        }
    }

    /// Insert text at the cursor, splitting on line breaks.
    ///
    /// `\n`, `\r\n` and a lone `\r` all start a new line.
    pub fn insert_str(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    self.insert_newline();
                }
                '\n' => self.insert_newline(),
                c => self.insert_char(c),
            }
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the content was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                true
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.insert_newline();
                true
            }
            (KeyCode::Backspace, _) => self.delete_backward(),
            (KeyCode::Delete, _) => self.delete_forward(),
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.move_left();
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                self.move_right();
                false
            }
            (KeyCode::Up, KeyModifiers::NONE) => {
                if self.cursor_line > 0 {
                    self.cursor_line -= 1;
                    self.clamp_cursor_col();
                }
                false
            }
            (KeyCode::Down, KeyModifiers::NONE) => {
                if self.cursor_line + 1 < self.lines.len() {
                    self.cursor_line += 1;
                    self.clamp_cursor_col();
                }
                false
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor_col = 0;
                false
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor_col = self.line_len(self.cursor_line);
                false
            }
            // Ctrl+U - delete line content before cursor
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.cursor_col == 0 {
                    return false;
                }
                let end = self.byte_index(self.cursor_line, self.cursor_col);
                self.lines[self.cursor_line].replace_range(..end, "");
                self.cursor_col = 0;
                true
            }
            // Ctrl+K - delete from cursor to end of line, or join the next line
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                if self.cursor_col < self.line_len(self.cursor_line) {
                    let start = self.byte_index(self.cursor_line, self.cursor_col);
                    self.lines[self.cursor_line].truncate(start);
                    true
                } else {
                    self.join_next_line()
                }
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_line, self.cursor_col);
        self.lines[self.cursor_line].insert(idx, c);
        self.cursor_col += 1;
    }

    fn insert_newline(&mut self) {
        let idx = self.byte_index(self.cursor_line, self.cursor_col);
        let rest = self.lines[self.cursor_line].split_off(idx);
        self.lines.insert(self.cursor_line + 1, rest);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            let idx = self.byte_index(self.cursor_line, self.cursor_col);
            self.lines[self.cursor_line].remove(idx);
            true
        } else if self.cursor_line > 0 {
            let current = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.line_len(self.cursor_line);
            self.lines[self.cursor_line].push_str(&current);
            true
        } else {
            false
        }
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor_col < self.line_len(self.cursor_line) {
            let idx = self.byte_index(self.cursor_line, self.cursor_col);
            self.lines[self.cursor_line].remove(idx);
            true
        } else {
            self.join_next_line()
        }
    }

    fn join_next_line(&mut self) -> bool {
        if self.cursor_line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&next);
            true
        } else {
            false
        }
    }

    fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.line_len(self.cursor_line);
        }
    }

    fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_line) {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    /// Render the text editor.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        let t = theme();
        let visible_height = area.height.saturating_sub(2) as usize;
        self.ensure_cursor_visible(visible_height);

        let display_lines: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll)
            .take(visible_height)
            .map(|line| Line::from(line.as_str()))
            .collect();

        let (border_style, title_style) = if focused {
            (
                Style::default().fg(t.focus),
                Style::default().fg(t.focus).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(t.muted), Style::default().fg(t.fg))
        };

        let title = format!(" {} ({}/{}) ", label, self.cursor_line + 1, self.lines.len());
        let block = Block::default()
            .title(Span::styled(title, title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(
            Paragraph::new(display_lines)
                .style(Style::default().fg(t.fg))
                .block(block),
            area,
        );

        if focused {
            let cursor_x = area.x + 1 + self.cursor_col as u16;
            let cursor_y = area.y + 1 + (self.cursor_line - self.scroll) as u16;
            if cursor_y < area.y + area.height.saturating_sub(1)
                && cursor_x < area.x + area.width.saturating_sub(1)
            {
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::empty()
    }
}
