//! Core document types.

use std::ops::Range;

/// A parsed and laid-out markdown document.
///
/// Holds the source text together with the view derived from it at one
/// layout width. A document is never patched in place: reflowing or
/// reloading builds a new value that replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Original source text
    source: String,
    /// Rendered lines for display
    lines: Vec<RenderedLine>,
    /// Layout width the lines were wrapped for
    width: usize,
}

impl Document {
    /// Create an empty document.
    pub const fn empty() -> Self {
        Self {
            source: String::new(),
            lines: Vec::new(),
            width: 0,
        }
    }

    pub(crate) const fn from_parts(source: String, lines: Vec<RenderedLine>, width: usize) -> Self {
        Self {
            source,
            lines,
            width,
        }
    }

    /// Get the total number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the layout width this document was wrapped for.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get every rendered line in scroll order.
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Get the lines in `range`, clamped to the document.
    pub fn lines_in(&self, range: Range<usize>) -> &[RenderedLine] {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        &self.lines[start..end]
    }

    /// Get a specific rendered line by index.
    pub fn line_at(&self, index: usize) -> Option<&RenderedLine> {
        self.lines.get(index)
    }

    /// Get the source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single rendered line with styling information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// The text content of the line
    content: String,
    /// The type of line (for styling)
    line_type: LineType,
}

impl RenderedLine {
    /// Create a new rendered line.
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self { content, line_type }
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the line type.
    pub const fn line_type(&self) -> LineType {
        self.line_type
    }
}

/// Type of a rendered line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    /// Normal paragraph text
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    /// Code block line
    CodeBlock,
    /// Block quote line
    BlockQuote,
    /// Ordered or unordered list item
    ListItem,
    /// Horizontal rule, fence marker or heading underline
    HorizontalRule,
    /// Empty line
    Empty,
}

/// A classified unit of source, before width-dependent wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading text, already stripped (and upper-cased for levels 1-2)
    Heading { level: u8, text: String },
    /// `-`, `*` or `+` list item
    UnorderedItem { text: String },
    /// Numbered list item; `marker` is the source marker verbatim, e.g. `3.`
    OrderedItem { marker: String, text: String },
    /// `>` quote line
    Quote { text: String },
    /// Verbatim line inside a code fence
    Code { text: String },
    /// Separator; `None` fills the line, `Some(n)` is a heading underline
    Rule { length: Option<usize> },
    /// Whitespace-only line
    Blank,
    /// Anything else
    Paragraph { text: String },
}

impl Block {
    /// Style tag every line produced from this block carries.
    pub const fn line_type(&self) -> LineType {
        match self {
            Self::Heading { level, .. } => LineType::Heading(*level),
            Self::UnorderedItem { .. } | Self::OrderedItem { .. } => LineType::ListItem,
            Self::Quote { .. } => LineType::BlockQuote,
            Self::Code { .. } => LineType::CodeBlock,
            Self::Rule { .. } => LineType::HorizontalRule,
            Self::Blank => LineType::Empty,
            Self::Paragraph { .. } => LineType::Paragraph,
        }
    }
}
