//! Search functionality.
//!
//! Case-insensitive substring search over rendered lines, stepping forward
//! or backward from the last match and wrapping around the document.

use crate::document::RenderedLine;

/// Which way to step from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Remembered query and the line of the last hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: Option<String>,
    last_found: Option<usize>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last submitted query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Line index of the last hit, if it is still valid.
    pub const fn last_found(&self) -> Option<usize> {
        self.last_found
    }

    /// Remember `query` for later `n`/`N` steps. An empty query forgets the
    /// previous one, so repeating does nothing until a new search.
    ///
    /// Returns whether there is a query to search for.
    pub fn set_query(&mut self, query: &str) -> bool {
        self.query = (!query.is_empty()).then(|| query.to_string());
        self.query.is_some()
    }

    /// Forget the last hit. Called whenever the rendered lines change.
    pub const fn invalidate(&mut self) {
        self.last_found = None;
    }

    /// Find the next line containing `query`.
    ///
    /// The scan starts just past the last hit (or the viewport `offset` when
    /// there is none) and wraps around once. A hit is recorded as the new
    /// last match. A miss leaves the state untouched.
    ///
    /// ```
    /// use mdview::document::Document;
    /// use mdview::search::{SearchDirection, SearchState};
    ///
    /// let doc = Document::parse("alpha\nbeta\nalpha again");
    /// let mut search = SearchState::new();
    /// assert_eq!(search.search(doc.lines(), "ALPHA", SearchDirection::Forward, 0), Some(2));
    /// assert_eq!(search.search(doc.lines(), "alpha", SearchDirection::Forward, 0), Some(0));
    /// ```
    pub fn search(
        &mut self,
        lines: &[RenderedLine],
        query: &str,
        direction: SearchDirection,
        offset: usize,
    ) -> Option<usize> {
        if query.is_empty() || lines.is_empty() {
            return None;
        }
        let needle = query.to_lowercase();
        let matches = |idx: &usize| lines[*idx].content().to_lowercase().contains(&needle);

        let start = self.last_found.unwrap_or(offset).min(lines.len());
        let found = match direction {
            SearchDirection::Forward => (start + 1..lines.len())
                .find(matches)
                .or_else(|| (0..lines.len()).find(matches)),
            SearchDirection::Backward => (0..start)
                .rev()
                .find(matches)
                .or_else(|| (0..lines.len()).rev().find(matches)),
        };

        if let Some(idx) = found {
            self.last_found = Some(idx);
        }
        found
    }

    /// Repeat the remembered query.
    pub fn repeat(
        &mut self,
        lines: &[RenderedLine],
        direction: SearchDirection,
        offset: usize,
    ) -> Option<usize> {
        let query = self.query.clone()?;
        self.search(lines, &query, direction, offset)
    }
}
