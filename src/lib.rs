// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. search::SearchState)
    clippy::module_name_repetitions
)]

//! # mdview
//!
//! A terminal pager for markdown files.
//!
//! mdview lays a markdown file out as styled, width-wrapped lines and lets
//! you scroll through them with:
//! - Colored headings, lists, quotes and code blocks
//! - Incremental case-insensitive search with wrap-around
//! - Reload from disk and rewrapping on resize
//!
//! ## Architecture
//!
//! mdview uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`document`]: Markdown parsing and layout
//! - [`ui`]: Terminal UI components
//! - [`search`]: Search functionality

pub mod app;
pub mod document;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::Document;
    pub use crate::search::{SearchDirection, SearchState};
    pub use crate::ui::viewport::Viewport;
}
