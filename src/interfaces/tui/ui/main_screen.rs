use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, truncate_display};
use crate::utils::TimeParser;

fn header_cell(name: &str) -> Span<'static> {
    Span::styled(
        name.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Centered message inside the list frame
fn draw_placeholder(frame: &mut Frame, area: Rect, title: String, lines: Vec<Line>) {
    let mut text = vec![Line::from(""), Line::from("")];
    text.extend(lines);

    let placeholder = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(placeholder, area);
}

fn key_hint(prefix: &str, key: &str, color: Color, suffix: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(
            key.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(suffix.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let store = &app.ctx.store;

    // 首次加载完成前只显示占位
    if !store.has_loaded() {
        let lines = match store.last_error() {
            Some(e) if !store.is_loading() => vec![
                Line::from(Span::styled(
                    "Could not load links",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    e.message().to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                key_hint("Press ", "[r]", Color::Blue, " to retry"),
            ],
            _ => vec![Line::from(Span::styled(
                "Loading links...",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ))],
        };
        draw_placeholder(frame, area, "Short Links".to_string(), lines);
        return;
    }

    let links = app.display_links();

    if links.is_empty() {
        if app.is_searching() {
            let lines = vec![
                Line::from(Span::styled(
                    "No links match your search",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                key_hint("Press ", "[Esc]", Color::Yellow, " to clear search"),
            ];
            draw_placeholder(
                frame,
                area,
                format!("Search Results (\"{}\")", app.search_query()),
                lines,
            );
        } else {
            let lines = vec![
                Line::from(Span::styled(
                    "No short links found",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                key_hint("Press ", "[a]", Color::Green, " to create your first link"),
            ];
            draw_placeholder(frame, area, "Short Links".to_string(), lines);
        }
        return;
    }

    let now = Utc::now();
    let header = Row::new(vec![
        header_cell("Code"),
        header_cell("URL"),
        header_cell("Clicks"),
        header_cell("Last Clicked"),
        header_cell(""),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = links
        .iter()
        .map(|link| {
            let copied = if app.ctx.view.is_copied(&link.short_code) {
                Span::styled(
                    "✓ Copied",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("")
            };

            Row::new(vec![
                Span::styled(
                    link.short_code.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate_display(&link.original_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    link.click_count.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    TimeParser::format_last_clicked(link.last_clicked_at, now),
                    Style::default().fg(Color::DarkGray),
                ),
                copied,
            ])
        })
        .collect();

    let title = if app.is_searching() {
        format!(
            "Search: \"{}\" ({} of {})",
            app.search_query(),
            links.len(),
            store.len()
        )
    } else {
        format!("Short Links ({})", links.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold()),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
