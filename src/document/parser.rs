//! Line-oriented markdown block parsing.
//!
//! Each source line is classified on its own; the only state carried between
//! lines is whether we are inside a code fence.

use unicode_width::UnicodeWidthStr;

use super::inline::strip_inline;
use super::types::{Block, Document};
use super::wrap::layout;

/// Default layout width used by [`Document::parse`].
const DEFAULT_LAYOUT_WIDTH: usize = 78;

/// Classification of a single source line outside a code fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Opening or closing code fence
    CodeToggle,
    /// Horizontal rule (`---`, `* * *`, `___`)
    Rule,
    /// ATX heading with level 1-6
    Heading(u8),
    /// `-`, `*` or `+` list item
    UnorderedItem,
    /// Numbered list item with its marker, e.g. `12.` or `3)`
    OrderedItem(String),
    /// `>` quote
    Quote,
    /// Whitespace only
    Blank,
    /// Anything else
    Paragraph,
}

impl Document {
    /// Parse markdown source and lay it out.
    ///
    /// # Example
    ///
    /// ```
    /// use mdview::document::Document;
    ///
    /// let doc = Document::parse("# Hello\n\nWorld");
    /// assert_eq!(doc.line_count(), 4); // heading + underline + blank + paragraph
    /// ```
    pub fn parse(source: &str) -> Self {
        Self::parse_with_layout(source, DEFAULT_LAYOUT_WIDTH)
    }

    /// Parse markdown source and wrap it for the given layout width.
    pub fn parse_with_layout(source: &str, width: usize) -> Self {
        let blocks = parse_blocks(source);
        let lines = layout(&blocks, width);
        Self::from_parts(source.to_string(), lines, width)
    }

    /// Rebuild the view from the retained source at a new layout width.
    #[must_use]
    pub fn reflow(&self, width: usize) -> Self {
        Self::parse_with_layout(self.source(), width)
    }
}

/// Classify one line. Checks run in a fixed order and the first match wins.
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        return LineClass::CodeToggle;
    }
    if is_rule(line) {
        return LineClass::Rule;
    }
    if let Some(level) = heading_level(line) {
        return LineClass::Heading(level);
    }
    if unordered_item_text(line).is_some() {
        return LineClass::UnorderedItem;
    }
    if let Some((marker, _)) = ordered_item_parts(line) {
        return LineClass::OrderedItem(marker.to_string());
    }
    if trimmed.starts_with('>') {
        return LineClass::Quote;
    }
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    LineClass::Paragraph
}

/// Split source into blocks in a single forward pass.
pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut in_code_fence = false;

    for line in source.lines() {
        let class = classify_line(line);
        if class == LineClass::CodeToggle {
            in_code_fence = !in_code_fence;
            blocks.push(Block::Rule { length: None });
            continue;
        }
        if in_code_fence {
            blocks.push(Block::Code {
                text: line.to_string(),
            });
            continue;
        }

        match class {
            LineClass::CodeToggle => {}
            LineClass::Rule => blocks.push(Block::Rule { length: None }),
            LineClass::Heading(level) => push_heading(&mut blocks, line, level),
            LineClass::UnorderedItem => {
                let text = unordered_item_text(line).unwrap_or_default();
                blocks.push(Block::UnorderedItem {
                    text: strip_inline(text),
                });
            }
            LineClass::OrderedItem(marker) => {
                let text = ordered_item_parts(line).map_or("", |(_, text)| text);
                blocks.push(Block::OrderedItem {
                    marker,
                    text: strip_inline(text),
                });
            }
            LineClass::Quote => {
                let text = line.trim_start().strip_prefix('>').unwrap_or_default();
                blocks.push(Block::Quote {
                    text: strip_inline(text.trim_start()),
                });
            }
            LineClass::Blank => blocks.push(Block::Blank),
            LineClass::Paragraph => blocks.push(Block::Paragraph {
                text: strip_inline(line),
            }),
        }
    }

    blocks
}

fn push_heading(blocks: &mut Vec<Block>, line: &str, level: u8) {
    let body = &line[usize::from(level)..];
    let mut text = strip_inline(body).trim().to_string();
    if level <= 2 {
        text = text.to_uppercase();
        let underline = text.width();
        blocks.push(Block::Heading { level, text });
        blocks.push(Block::Rule {
            length: Some(underline),
        });
    } else {
        blocks.push(Block::Heading { level, text });
    }
}

fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }
    let mut count = 1;
    for c in marks {
        if c != first {
            return false;
        }
        count += 1;
    }
    count >= 3
}

fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// Text after an unordered list marker, if `line` is one.
fn unordered_item_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .or_else(|| trimmed.strip_prefix('+'))?;
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

/// Marker and text of an ordered list item, if `line` is one.
fn ordered_item_parts(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &trimmed[digits..];
    if !(rest.starts_with('.') || rest.starts_with(')')) {
        return None;
    }
    let after = &rest[1..];
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    Some((&trimmed[..=digits], after.trim_start()))
}
