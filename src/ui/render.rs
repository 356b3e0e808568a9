use std::borrow::Cow;

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::Model;

use super::{status, style};

const ELLIPSIS: char = '…';

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    // Reserve last line for the status bar / search prompt.
    let doc_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_document(model, frame, doc_area);

    if let Some(input) = model.prompt.as_deref() {
        status::render_search_prompt(input, frame, status_area);
    } else {
        status::render_status_bar(model, frame, status_area);
    }
}

fn render_document(model: &Model, frame: &mut Frame, area: Rect) {
    let max_width = usize::from(area.width.saturating_sub(1));
    let range = model.viewport.visible_range();
    let content: Vec<Line> = model
        .document
        .lines_in(range)
        .iter()
        .take(usize::from(area.height))
        .map(|line| {
            let line_style = style::style_for_line_type(line.line_type(), model.color_support);
            Line::styled(
                truncate_to_width(line.content(), max_width).into_owned(),
                line_style,
            )
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

/// Cut `text` to at most `max_width` cells, ending in `…` when anything was
/// dropped.
///
/// ```
/// use mdview::ui::truncate_to_width;
///
/// assert_eq!(truncate_to_width("short", 10), "short");
/// assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}
