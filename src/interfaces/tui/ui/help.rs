use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const KEYS: &[(&str, &str)] = &[
    ("Up/Down, j/k", "Move selection"),
    ("PgUp/PgDn, g/G", "Page / jump to top or bottom"),
    ("/", "Search by code or URL"),
    ("Esc", "Clear search"),
    ("Enter, v", "Show click statistics"),
    ("a", "Create a short link"),
    ("y", "Copy short URL"),
    ("d", "Delete link"),
    ("r", "Refresh from server"),
    ("?", "This help"),
    ("q", "Quit"),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help", popup::HELP)
        .theme_color(Color::Blue)
        .render(frame, area);

    let mut text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
    ];
    text.extend(KEYS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("{:<18}", key), Style::default().fg(Color::Cyan).bold()),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ])
    }));

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner_area);
}
