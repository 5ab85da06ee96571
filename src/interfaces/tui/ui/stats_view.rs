//! Single-link statistics view

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::services::StatsState;
use crate::utils::TimeParser;

fn field<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color).bold()),
    ])
}

pub fn draw_stats_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner_area = Popup::new("Link Statistics", popup::STATS)
        .theme_color(Color::Cyan)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let text = match app.ctx.stats.state() {
        StatsState::Idle => vec![],
        StatsState::Loading { code } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Loading stats for {}...", code),
                Style::default().fg(Color::Gray),
            )),
        ],
        StatsState::NotFound { code } => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Link not found",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("No link with code \"{}\"", code),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to go back",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        StatsState::Found(link) => {
            let now = Utc::now();
            let last_activity = match link.last_clicked_at {
                Some(at) => format!(
                    "{} ({})",
                    TimeParser::format_absolute(at),
                    TimeParser::format_relative(at, now)
                ),
                None => "Never clicked".to_string(),
            };
            let short_url = app.ctx.view.resolver().resolve(&link.short_code);
            let copied = if app.ctx.view.is_copied(&link.short_code) {
                "  ✓ Copied"
            } else {
                ""
            };

            vec![
                Line::from(""),
                field("Short code", link.short_code.clone(), Color::Cyan),
                Line::from(vec![
                    Span::styled(format!("{:<14}", "Short URL"), Style::default().fg(Color::DarkGray)),
                    Span::styled(short_url, Style::default().fg(Color::Magenta)),
                    Span::styled(copied, Style::default().fg(Color::Green).bold()),
                ]),
                field("Target", link.original_url.clone(), Color::Blue),
                Line::from(""),
                field("Total clicks", link.click_count.to_string(), Color::Green),
                field("Last activity", last_activity, Color::Yellow),
                field("Created", TimeParser::format_date(link.created_at), Color::White),
            ]
        }
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
