use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::color::Channel;
use crate::editor::{FocusPosition, Snapshot};
use crate::tui::colors;

/// Horizontal track glyph
const TRACK: &str = "─";

/// Column of the marker on a track `width` cells wide
pub fn marker_offset(value: u8, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    (u32::from(value) * u32::from(width - 1) / 255) as u16
}

/// Render the three channel sliders, one every other row
pub fn render_sliders(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    for (i, channel) in Channel::ALL.into_iter().enumerate() {
        let focused = snapshot.focus == FocusPosition::Slider(channel);
        render_slider(frame, rows[i * 2], channel, snapshot.color.get(channel), focused);
    }
}

fn render_slider(frame: &mut Frame, area: Rect, channel: Channel, value: u8, focused: bool) {
    let [label_area, track_area, value_area] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(4),
    ])
    .areas(area);

    let label_style = if focused {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(channel.label(), label_style)),
        label_area,
    );

    let width = track_area.width;
    let offset = marker_offset(value, width);
    let marker_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let track = Line::from(vec![
        Span::styled(TRACK.repeat(offset as usize), Style::default().fg(colors::MUTED)),
        Span::styled("|", marker_style),
        Span::styled(
            TRACK.repeat(width.saturating_sub(offset + 1) as usize),
            Style::default().fg(colors::MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(track), track_area);

    frame.render_widget(
        Paragraph::new(format!("{:>4}", value)).style(label_style),
        value_area,
    );
}
