//! Width-dependent layout of parsed blocks.
//!
//! Widths are measured in terminal cells, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::types::{Block, LineType, RenderedLine};

const BULLET: &str = "• ";
const QUOTE_BAR: &str = "│ ";
const QUOTE_INDENT: &str = "  ";
const RULE_GLYPH: &str = "─";
const TAB_STOP: usize = 8;

/// Lay out every block at `width` columns, in source order.
pub fn layout(blocks: &[Block], width: usize) -> Vec<RenderedLine> {
    let text_width = width.saturating_sub(2).max(1);
    let mut lines = Vec::with_capacity(blocks.len());

    for block in blocks {
        let line_type = block.line_type();
        let mut push = |content: String| lines.push(RenderedLine::new(content, line_type));

        match block {
            Block::Heading { text, .. } | Block::Paragraph { text } => {
                let wrapped = wrap_words(text, text_width);
                if wrapped.is_empty() {
                    push(String::new());
                }
                wrapped.into_iter().for_each(push);
            }
            Block::UnorderedItem { text } => {
                for line in hanging_wrap(text, text_width, BULLET, "  ") {
                    push(line);
                }
            }
            Block::OrderedItem { marker, text } => {
                let prefix = format!("{marker} ");
                let indent = " ".repeat(prefix.width());
                for line in hanging_wrap(text, text_width, &prefix, &indent) {
                    push(line);
                }
            }
            Block::Quote { text } => {
                for line in hanging_wrap(text, text_width, QUOTE_BAR, QUOTE_INDENT) {
                    push(line);
                }
            }
            Block::Code { text } => split_code_line(text, text_width)
                .into_iter()
                .for_each(push),
            Block::Rule { length } => {
                let count = length.map_or(text_width, |n| n.min(text_width));
                push(RULE_GLYPH.repeat(count));
            }
            Block::Blank => push(String::new()),
        }
    }

    lines
}

/// Greedy word wrap. Runs of whitespace collapse to a single space, including
/// double spaces inside a line, and a word wider than `width` is placed on its
/// own line unbroken. Code lines never go through here.
///
/// ```
/// use mdview::document::wrap_words;
///
/// assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
/// assert!(wrap_words("   ", 10).is_empty());
/// ```
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` so that `first_prefix` + line fits in `width`, with
/// continuation lines starting with `next_prefix`.
fn hanging_wrap(text: &str, width: usize, first_prefix: &str, next_prefix: &str) -> Vec<String> {
    let body_width = width.saturating_sub(first_prefix.width()).max(1);
    let wrapped = wrap_words(text, body_width);
    if wrapped.is_empty() {
        return vec![first_prefix.to_string()];
    }
    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { first_prefix } else { next_prefix };
            format!("{prefix}{line}")
        })
        .collect()
}

/// Split a code line into chunks of at most `width` cells, keeping every
/// whitespace character.
fn split_code_line(line: &str, width: usize) -> Vec<String> {
    let expanded = expand_tabs(line);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in expanded.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_STOP);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - column % TAB_STOP;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += ch.width().unwrap_or(0);
        }
    }
    out
}
