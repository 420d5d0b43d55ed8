//! Event handling for the terminal form.
//!
//! Terminal input is polled and turned into application events.

mod handler;

pub use handler::EventHandler;

use crossterm::event::KeyEvent;

/// An event consumed by the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Text pasted into the terminal.
    Paste(String),
    /// No input arrived within the tick rate.
    Tick,
}
