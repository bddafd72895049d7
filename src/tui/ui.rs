use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::editor::Snapshot;

use super::colors;
use super::widgets::{
    render_help_footer, render_input_line, render_palette_strip, render_preview, render_sliders,
};

/// Application title shown on the outer border
const TITLE: &str = " rgbpal ";

/// Main render function
pub fn render(frame: &mut Frame, snapshot: &Snapshot<'_>) {
    let area = frame.area();

    let [main_area, footer_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(
                format!(" [{}] ", snapshot.mode),
                Style::default().fg(colors::PRIMARY),
            ))
            .right_aligned(),
        );
    let inner = block.inner(main_area);
    frame.render_widget(block, main_area);

    // Body layout: color editor, divider, palette, input/status line
    let [editor_area, divider_area, palette_area, _, input_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_editor(frame, snapshot, editor_area);

    let divider = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));
    frame.render_widget(divider, divider_area);

    render_palette_strip(frame, snapshot, palette_area);
    render_input_line(frame, snapshot, input_area);
    render_help_footer(frame, snapshot.mode, footer_area);
}

/// Preview on the left, sliders on the right
fn render_editor(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let [preview_area, _, slider_area] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_preview(frame, snapshot.color, preview_area);

    let [_, slider_rows, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(slider_area);
    render_sliders(frame, snapshot, slider_rows);
}
