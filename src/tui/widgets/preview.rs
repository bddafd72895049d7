use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::color::Color;
use crate::tui::colors;

/// Text line describing the current color
pub fn color_value_text(color: Color) -> String {
    format!(
        "Colour value: R={}, G={}, B={}",
        color.r, color.g, color.b
    )
}

/// Render the color swatch with its numeric value underneath
pub fn render_preview(frame: &mut Frame, color: Color, area: Rect) {
    let [swatch_area, value_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let swatch = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::swatch(color)));
    let hex = Paragraph::new(Span::styled(
        color.to_hex(),
        Style::default().fg(colors::contrast_text(color)),
    ))
    .block(swatch);
    frame.render_widget(hex, swatch_area);

    let value = Paragraph::new(Line::from(color_value_text(color)));
    frame.render_widget(value, value_area);
}
