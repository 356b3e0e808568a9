//! Theming and color definitions.
//!
//! This module defines the visual styling for rendered markdown elements.
//! Uses ANSI colors that adapt to the terminal's color palette, and falls
//! back to attribute-only styling on terminals without color.

use ratatui::style::{Color, Modifier, Style};

use crate::document::LineType;

/// What the terminal can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorSupport {
    /// At least the 8 basic ANSI colors
    #[default]
    Color,
    /// Attributes (bold, dim, reverse) only
    Monochrome,
}

impl ColorSupport {
    /// Query the terminal backend for its color capability.
    pub fn detect() -> Self {
        Self::from_color_count(crossterm::style::available_color_count())
    }

    /// Classify a reported color count.
    pub const fn from_color_count(count: u16) -> Self {
        if count >= 8 {
            Self::Color
        } else {
            Self::Monochrome
        }
    }
}

/// Get the style for a given line type.
pub fn style_for_line_type(line_type: LineType, support: ColorSupport) -> Style {
    match support {
        ColorSupport::Color => color_style(line_type),
        ColorSupport::Monochrome => monochrome_style(line_type),
    }
}

fn color_style(line_type: LineType) -> Style {
    let base = Style::new();
    match line_type {
        // Headings - bold with distinct colors per level
        LineType::Heading(1) => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LineType::Heading(2) => base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        LineType::Heading(3) => base.fg(Color::Magenta).add_modifier(Modifier::BOLD),
        LineType::Heading(4) => base.fg(Color::White).add_modifier(Modifier::BOLD),
        LineType::Heading(5) => base.fg(Color::White),
        LineType::Heading(_) => base.fg(Color::White).add_modifier(Modifier::DIM),

        LineType::ListItem => base.fg(Color::Green),
        LineType::BlockQuote => base.fg(Color::Blue),

        // Code blocks - inverted panel so indentation stays visible
        LineType::CodeBlock => base.fg(Color::Black).bg(Color::White),

        LineType::HorizontalRule => base.add_modifier(Modifier::DIM),

        LineType::Paragraph | LineType::Empty => base,
    }
}

fn monochrome_style(line_type: LineType) -> Style {
    let base = Style::new();
    match line_type {
        LineType::Heading(_) => base.add_modifier(Modifier::BOLD),
        LineType::HorizontalRule => base.add_modifier(Modifier::DIM),
        LineType::CodeBlock | LineType::BlockQuote => base.add_modifier(Modifier::REVERSED),
        LineType::ListItem | LineType::Paragraph | LineType::Empty => base,
    }
}

/// Style of the status bar and search prompt row.
pub fn status_bar_style() -> Style {
    Style::new().add_modifier(Modifier::REVERSED)
}
