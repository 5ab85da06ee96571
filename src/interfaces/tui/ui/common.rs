use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Draw title bar with version, API origin and link count
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let store = &app.ctx.store;
    let total = if store.has_loaded() {
        format!("Total: {} ", store.len())
    } else {
        "Total: - ".to_string()
    };

    let mut spans = vec![
        Span::styled(
            "Shortlinker Dashboard",
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(total, Style::default().fg(Color::Yellow)),
    ];
    if store.is_loading() {
        spans.push(Span::styled("| loading...", Style::default().fg(Color::DarkGray)));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            app.status_message.clone(),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else if let Some(code) = &app.deleting {
        (format!("Deleting {}...", code), Style::default().fg(Color::Yellow))
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        vec![
            ("Enter", "Keep Filter", Color::Green),
            ("Esc", "Clear", Color::Red),
        ]
    } else {
        match app.current_screen {
            CurrentScreen::Main => vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("/", "Search", Color::Cyan),
                ("Enter", "Stats", Color::Cyan),
                ("a", "Add", Color::Green),
                ("y", "Copy URL", Color::Yellow),
                ("d", "Delete", Color::Red),
                ("r", "Refresh", Color::Blue),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
            CurrentScreen::AddLink => vec![
                ("Tab", "Switch Field", Color::Cyan),
                ("Enter", "Create", Color::Green),
                ("Esc", "Close", Color::Red),
            ],
            CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
                vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
            }
            CurrentScreen::Stats => vec![
                ("y", "Copy URL", Color::Yellow),
                ("Esc", "Back", Color::Red),
            ],
            CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
