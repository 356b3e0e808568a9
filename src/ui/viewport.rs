//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks the visible area of the document
//! and handles all scroll operations.

use std::ops::Range;

/// Manages the visible portion of a document.
///
/// The viewport tracks:
/// - Terminal width and the number of body rows (terminal height minus the
///   status bar)
/// - Current scroll offset (in rendered lines)
/// - Total document length
///
/// Every mutation leaves `offset <= total_lines.saturating_sub(height)`.
/// The offset is a raw line index: when the document is rebuilt at another
/// width the same index may point at different content.
///
/// # Example
///
/// ```
/// use mdview::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 23, 100);
/// assert_eq!(vp.visible_range(), 0..23);
///
/// vp.scroll_down(10);
/// assert_eq!(vp.visible_range(), 10..33);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Rows available for document lines
    /// * `total_lines` - Total lines in the document
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the number of document rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of lines in the document.
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines.
    ///
    /// Returns a range from the current offset to offset + height,
    /// clamped to the document bounds.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll by a signed number of lines.
    pub fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.scroll_up(delta.unsigned_abs());
        } else {
            self.scroll_down(delta.unsigned_abs());
        }
    }

    /// Scroll up by n lines.
    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines.
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    /// Scroll up one page.
    pub const fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    /// Go to the beginning of the document.
    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    /// Go to the end of the document.
    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Go to a specific line.
    ///
    /// The line will be positioned at the top of the viewport.
    pub fn go_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    /// Adopt a new size and document length together, clamping the offset
    /// once against both.
    pub fn rebuild(&mut self, width: u16, height: u16, total_lines: usize) {
        self.width = width;
        self.height = height;
        self.total_lines = total_lines;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of lines (e.g., after reload).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Calculate the maximum valid offset.
    pub const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }

    // One line of overlap between pages, never less than one line.
    const fn page_size(&self) -> usize {
        let rows = self.height as usize;
        if rows > 1 { rows - 1 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(80, 23, 100);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_visible_range_at_top() {
        let vp = Viewport::new(80, 23, 100);
        assert_eq!(vp.visible_range(), 0..23);
    }

    #[test]
    fn test_visible_range_at_bottom() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.go_to_bottom();
        assert_eq!(vp.visible_range(), 77..100);
    }

    #[test]
    fn test_visible_range_with_short_document() {
        let vp = Viewport::new(80, 23, 10);
        assert_eq!(vp.visible_range(), 0..10);
    }

    #[test]
    fn test_scroll_down() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(10);
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_scroll_down_clamps_to_max() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(1000);
        assert_eq!(vp.offset(), 77);
    }

    #[test]
    fn test_scroll_up_clamps_to_zero() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(10);
        vp.scroll_up(100);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_scroll_by_signed_delta() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_by(12);
        vp.scroll_by(-5);
        assert_eq!(vp.offset(), 7);
        vp.scroll_by(-50);
        assert_eq!(vp.offset(), 0);
        vp.scroll_by(isize::MAX);
        assert_eq!(vp.offset(), 77);
    }

    #[test]
    fn test_page_down_keeps_one_line_overlap() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.page_down();
        assert_eq!(vp.offset(), 22);
    }

    #[test]
    fn test_page_up() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(50);
        vp.page_up();
        assert_eq!(vp.offset(), 28);
    }

    #[test]
    fn test_page_moves_with_single_row() {
        let mut vp = Viewport::new(80, 1, 10);
        vp.page_down();
        assert_eq!(vp.offset(), 1);
    }

    #[test]
    fn test_go_to_top() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(50);
        vp.go_to_top();
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_go_to_line_clamps() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.go_to_line(1000);
        assert_eq!(vp.offset(), 77);
    }

    #[test]
    fn test_short_document_cannot_scroll() {
        let mut vp = Viewport::new(80, 23, 5);
        vp.scroll_down(3);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_rebuild_keeps_valid_offset() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(50);
        vp.rebuild(80, 60, 100);
        assert_eq!(vp.offset(), 40);
    }

    #[test]
    fn test_rebuild_clamps_against_new_length() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.go_to_bottom();
        assert_eq!(vp.offset(), 77);
        // Taller but much longer: the old length alone would force 60.
        vp.rebuild(30, 40, 300);
        assert_eq!(vp.offset(), 77);
        assert_eq!(vp.total_lines(), 300);
    }

    #[test]
    fn test_set_total_lines_adjusts_offset() {
        let mut vp = Viewport::new(80, 23, 100);
        vp.scroll_down(77);
        vp.set_total_lines(50);
        assert_eq!(vp.offset(), 27);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Scroll(isize),
            Page(bool),
            Rebuild(u16, usize),
            SetTotal(usize),
            Bottom,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (-500isize..500).prop_map(Op::Scroll),
                any::<bool>().prop_map(Op::Page),
                ((1u16..100), (0usize..2000)).prop_map(|(h, n)| Op::Rebuild(h, n)),
                (0usize..2000).prop_map(Op::SetTotal),
                Just(Op::Bottom),
            ]
        }

        proptest! {
            #[test]
            fn offset_stays_clamped(
                total_lines in 0..2000usize,
                height in 1..100u16,
                ops in prop::collection::vec(op(), 0..50),
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                for op in ops {
                    let before = vp.offset();
                    match op {
                        Op::Scroll(delta) => vp.scroll_by(delta),
                        Op::Page(true) => vp.page_down(),
                        Op::Page(false) => vp.page_up(),
                        Op::Rebuild(h, n) => {
                            vp.rebuild(80, h, n);
                            // Only clamped, never moved further than needed
                            prop_assert_eq!(vp.offset(), before.min(n.saturating_sub(h as usize)));
                        }
                        Op::SetTotal(n) => vp.set_total_lines(n),
                        Op::Bottom => vp.go_to_bottom(),
                    }
                    let max = vp.total_lines().saturating_sub(vp.height() as usize);
                    prop_assert!(vp.offset() <= max);
                }
            }

            #[test]
            fn visible_range_within_bounds(
                total_lines in 0..10000usize,
                height in 1..100u16,
                offset in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                vp.scroll_down(offset);

                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
            }
        }
    }
}
