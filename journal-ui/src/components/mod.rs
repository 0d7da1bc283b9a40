//! UI Components
//!
//! Leptos components for creating and reading journals.

pub mod create_journal;
pub mod journal_view;
pub mod loading;
pub mod nav;

pub use create_journal::CreateJournal;
pub use journal_view::JournalView;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
