use std::path::PathBuf;

use crate::document::{Document, SourceError, read_source};
use crate::search::{SearchDirection, SearchState};
use crate::ui::style::ColorSupport;
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// The rendered lines, the viewport and the search position only change
/// together: every rebuild of the document also clamps the viewport and
/// forgets the last search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The parsed and wrapped document
    pub document: Document,
    /// Scroll position and visible rows
    pub viewport: Viewport,
    /// Path of the file being viewed
    pub file_path: PathBuf,
    /// Remembered query and last hit
    pub search: SearchState,
    /// Text typed into the search prompt while it is open
    pub prompt: Option<String>,
    /// Whether line styles may use colors
    pub color_support: ColorSupport,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

impl Model {
    /// Create a new model with default settings.
    ///
    /// `terminal_size` is the full terminal; one row is kept for the status
    /// bar. The document is rewrapped for the terminal width.
    pub fn new(file_path: PathBuf, document: Document, terminal_size: (u16, u16)) -> Self {
        let layout_width = crate::ui::document_content_width(terminal_size.0);
        let document = if document.width() == layout_width {
            document
        } else {
            document.reflow(layout_width)
        };
        let total_lines = document.line_count();

        Self {
            document,
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(1),
                total_lines,
            ),
            file_path,
            search: SearchState::new(),
            prompt: None,
            color_support: ColorSupport::default(),
            should_quit: false,
        }
    }

    /// Set the color capability used for line styles.
    #[must_use]
    pub const fn with_color_support(mut self, support: ColorSupport) -> Self {
        self.color_support = support;
        self
    }

    /// Width the document is wrapped to for the current terminal.
    pub fn layout_width(&self) -> usize {
        crate::ui::document_content_width(self.viewport.width())
    }

    /// Adapt to a new terminal size.
    ///
    /// The offset is kept as a raw line index and only clamped, so after a
    /// width change the top row may show different content.
    pub(super) fn rebuild(&mut self, width: u16, height: u16) {
        let layout_width = crate::ui::document_content_width(width);
        if self.document.width() != layout_width {
            self.document = self.document.reflow(layout_width);
        }
        self.viewport
            .rebuild(width, height.saturating_sub(1), self.document.line_count());
        self.search.invalidate();
    }

    /// Re-read the file and rebuild the view.
    ///
    /// On failure nothing is changed.
    pub(super) fn reload_from_disk(&mut self) -> Result<(), SourceError> {
        let source = read_source(&self.file_path)?;
        self.document = Document::parse_with_layout(&source, self.layout_width());
        self.viewport.set_total_lines(self.document.line_count());
        self.search.invalidate();
        Ok(())
    }

    /// Step to the next or previous hit of the remembered query and bring it
    /// into view one line below the top.
    pub(super) fn jump_to_match(&mut self, direction: SearchDirection) {
        let offset = self.viewport.offset();
        if let Some(line) = self
            .search
            .repeat(self.document.lines(), direction, offset)
        {
            self.viewport.go_to_line(line.saturating_sub(1));
        }
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self {
            document: Document::empty(),
            viewport: Viewport::new(80, 23, 0),
            file_path: PathBuf::new(),
            search: SearchState::new(),
            prompt: None,
            color_support: ColorSupport::default(),
            should_quit: false,
        }
    }
}
