//! Reusable UI components.

mod banner;
mod input;
mod loading;
mod selector;
mod text_editor;

pub use banner::{Banner, BannerKind};
pub use input::TextInput;
pub use loading::LoadingIndicator;
pub use selector::Selector;
pub use text_editor::TextEditor;
