//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Line styles and the monochrome fallback

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::{render, truncate_to_width};
pub use status::status_line;

/// Columns kept free to the right of the document text.
pub const DOCUMENT_MARGIN: u16 = 2;
/// Narrowest layout width; narrower terminals show a clipped layout.
pub const MIN_LAYOUT_WIDTH: usize = 20;
/// Key summary shown in the status bar.
pub const HELP_TEXT: &str =
    "↑/k ↓/j: scroll  PgUp/PgDn  g/G: top/end  /:search  n/N: next/prev  r:reload  q:quit";

/// Layout width used to wrap the document for a terminal `total_width` wide.
pub fn document_content_width(total_width: u16) -> usize {
    usize::from(total_width.saturating_sub(DOCUMENT_MARGIN)).max(MIN_LAYOUT_WIDTH)
}
