//! User interface components and views.
//!
//! This module contains the terminal rendering of the issue form and the
//! widgets it is built from.

mod components;
pub mod theme;
mod views;

pub use components::{Banner, BannerKind, LoadingIndicator, Selector, TextEditor, TextInput};
pub use theme::theme;
pub use views::{CreateIssueAction, CreateIssueView, FormField};
