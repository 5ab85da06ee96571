use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::{colors, popup};
use crate::services::FormStatusKind;

pub fn draw_add_link_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner_area = Popup::new("Create Short Link", popup::ADD_LINK)
        .theme_color(Color::Green)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // URL + error
            Constraint::Length(4), // Custom code + error
            Constraint::Length(1),
            Constraint::Length(2), // Submit status
        ])
        .split(inner_area);

    let submitting = app.submitting;
    let form = &app.form;

    InputField::new(EditingField::Url.display_title(), &form.create.url)
        .required()
        .placeholder("https://example.com")
        .active(form.currently_editing == EditingField::Url)
        .error(form.field_error(EditingField::Url))
        .disabled(submitting)
        .render(frame, chunks[0]);

    InputField::new(
        EditingField::ShortCode.display_title(),
        &form.create.short_code,
    )
    .placeholder("optional, 6-8 letters or digits")
    .active(form.currently_editing == EditingField::ShortCode)
    .error(form.field_error(EditingField::ShortCode))
    .disabled(submitting)
    .render(frame, chunks[1]);

    let status_line = if submitting {
        Line::from(Span::styled(
            "Creating...",
            Style::default().fg(colors::WARNING),
        ))
    } else if let Some(status) = &form.create.status {
        let color = match status.kind {
            FormStatusKind::Success => colors::SUCCESS,
            FormStatusKind::Error => colors::ERROR,
        };
        Line::from(Span::styled(
            status.message.as_str(),
            Style::default().fg(color).bold(),
        ))
    } else {
        Line::from(Span::styled(
            "Press Enter to create",
            Style::default().fg(colors::MUTED),
        ))
    };

    frame.render_widget(Paragraph::new(status_line), chunks[3]);
}
