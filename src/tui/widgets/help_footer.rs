use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::Mode;
use crate::tui::colors;

/// Render the help footer widget
pub fn render_help_footer(frame: &mut Frame, mode: Mode, area: Rect) {
    let help_text = match mode {
        Mode::Normal => get_normal_mode_help(),
        Mode::Input => get_input_mode_help(),
    };

    let spans: Vec<Span> = help_text
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(colors::MUTED)),
                Span::raw("  "),
            ]
        })
        .collect();

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(paragraph, area);
}

fn get_normal_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("a/d", "-/+"),
        ("w/s", "Focus"),
        ("p", "Push"),
        ("g", "Pull"),
        ("S", "Save"),
        (":", "Input"),
        ("q", "Quit"),
    ]
}

fn get_input_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("0-255", "Set channel"),
        ("save <path>", "Save as"),
        ("Enter", "Confirm"),
        ("Esc", "Cancel"),
    ]
}
