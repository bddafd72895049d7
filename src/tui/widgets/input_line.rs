use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::{Mode, Snapshot, StatusLevel};
use crate::tui::colors;

/// Prompt shown before the input text
const PROMPT: &str = ": ";

/// Render the input line in Input mode, or the last status otherwise
pub fn render_input_line(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    match snapshot.mode {
        Mode::Input => {
            let line = Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(colors::PRIMARY)),
                Span::raw(snapshot.input),
            ]);
            frame.render_widget(Paragraph::new(line), area);

            // Keep the cursor inside the line even for long input
            let column = (PROMPT.len() + snapshot.cursor_offset) as u16;
            let x = area.x + column.min(area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y));
        }
        Mode::Normal => {
            let Some(status) = snapshot.status else {
                return;
            };
            let color = match status.level {
                StatusLevel::Info => colors::SUCCESS,
                StatusLevel::Error => colors::ERROR,
            };
            let line = Span::styled(
                status.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}
