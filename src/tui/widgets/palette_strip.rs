use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::editor::{FocusPosition, Snapshot};
use crate::tui::colors;

/// Render the palette slots side by side
pub fn render_palette_strip(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let count = snapshot.slots.len();
    if count == 0 {
        return;
    }

    let cells = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(area);

    for (i, (color, cell)) in snapshot.slots.iter().zip(cells.iter()).enumerate() {
        let focused = snapshot.focus == FocusPosition::PaletteSlot(i);
        let border_style = if focused {
            Style::default()
                .fg(colors::BORDER_FOCUS)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::BORDER)
        };

        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .borders(Borders::ALL)
            .border_style(border_style);
        let marker = if focused { "*" } else { "" };
        let swatch = Paragraph::new(marker)
            .style(
                Style::default()
                    .bg(colors::swatch(*color))
                    .fg(colors::contrast_text(*color)),
            )
            .block(block);
        frame.render_widget(swatch, *cell);
    }
}
