//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Header row background.
    pub header_bg: Color,
    /// Column-cursor highlight in the header.
    pub header_cursor: Color,
    /// Selected row highlight.
    pub row_highlight: Color,
    /// Accent color (active sort arrow, current page number).
    pub accent: Color,
    /// Dimmed elements (inactive arrows, disabled pager buttons).
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            header_bg: Color::Blue,
            header_cursor: Color::Cyan,
            row_highlight: Color::DarkGray,
            accent: Color::Cyan,
            dim: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Style for header cells.
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the header cell under the column cursor.
    pub fn header_cursor_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.header_cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected body row.
    pub fn row_highlight_style(&self) -> Style {
        Style::default().bg(self.row_highlight)
    }

    /// Style for accented footer elements.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed/disabled elements.
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}
