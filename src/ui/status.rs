use ratatui::prelude::*;
use ratatui::layout::Position;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

use super::render::truncate_to_width;
use super::{HELP_TEXT, style};

/// Text of the status bar: file name, position and key help.
pub fn status_line(model: &Model) -> String {
    let filename = model.file_path.file_name().map_or_else(
        || model.file_path.display().to_string(),
        |s| s.to_string_lossy().to_string(),
    );
    format!(
        " {}  {}/{}  {}",
        filename,
        model.viewport.offset() + 1,
        model.document.line_count(),
        HELP_TEXT
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let max_width = usize::from(area.width.saturating_sub(1));
    let status = status_line(model);
    let bar = Paragraph::new(truncate_to_width(&status, max_width).into_owned())
        .style(style::status_bar_style());
    frame.render_widget(bar, area);
}

pub fn render_search_prompt(input: &str, frame: &mut Frame, area: Rect) {
    let text = format!("/{input}");
    let bar = Paragraph::new(text.as_str()).style(style::status_bar_style());
    frame.render_widget(bar, area);

    let cursor_col = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(cursor_col)
        .min(area.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, area.y));
}
