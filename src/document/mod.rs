//! Markdown document parsing and layout.
//!
//! This module handles:
//! - Reading source text from disk
//! - Classifying lines into blocks
//! - Wrapping blocks to styled lines for display

mod inline;
mod parser;
mod source;
mod types;
mod wrap;

pub use inline::strip_inline;
pub use parser::{LineClass, classify_line, parse_blocks};
pub use source::{SourceError, read_source};
pub use types::{Block, Document, LineType, RenderedLine};
pub use wrap::{layout, wrap_words};

/// Read and lay out a markdown file in one step.
///
/// # Errors
///
/// Returns a [`SourceError`] if the file is missing or unreadable.
pub fn load_document(path: &std::path::Path, width: usize) -> Result<Document, SourceError> {
    let source = read_source(path)?;
    Ok(Document::parse_with_layout(&source, width))
}
