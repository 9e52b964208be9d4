//! Full-screen key-reference view.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keyboard reference shown on `?`.
pub struct HelpView;

/// Key/description pairs, grouped roughly by concern.
const BINDINGS: &[(&str, &str)] = &[
    ("h / ←", "focus previous column"),
    ("l / →", "focus next column"),
    ("s / Enter", "toggle sort on the focused column"),
    ("j / ↓", "select next row"),
    ("k / ↑", "select previous row"),
    ("n / PgDn", "next page"),
    ("p / PgUp", "previous page"),
    ("g", "first page"),
    ("G", "last page"),
    ("- / +", "smaller / larger page size"),
    ("r", "refresh the dataset"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

impl HelpView {
    /// Render the key reference centered in the given area.
    pub fn render(frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(""), Line::from("")];
        for (key, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:>10}  "), Style::default().fg(Color::Cyan)),
                Span::raw(*description),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_alignment(Alignment::Center);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
