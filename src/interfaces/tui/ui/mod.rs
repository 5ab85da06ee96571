// UI submodules
mod add_link;
mod common;
mod delete_confirm;
mod exiting;
mod help;
mod inline_search;
mod main_screen;
mod stats_view;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use add_link::draw_add_link_screen;
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_search_bar;
pub use main_screen::draw_main_screen;
pub use stats_view::draw_stats_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    // 有查询时保留搜索栏，便于看到当前过滤条件
    let show_search = app.inline_search_mode || app.is_searching();

    let mut constraints = vec![
        Constraint::Length(3), // Title
        Constraint::Min(10),   // Main content
    ];
    if show_search {
        constraints.push(Constraint::Length(3)); // Inline search bar
    }
    constraints.push(Constraint::Length(3)); // Status
    constraints.push(Constraint::Length(2)); // Footer

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // 弹窗叠加在列表之上
    draw_main_screen(frame, app, main_chunks[1]);
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::AddLink => draw_add_link_screen(frame, app, main_chunks[1]),
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::Stats => draw_stats_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
    }

    let mut next = 2;
    if show_search {
        draw_inline_search_bar(frame, app, main_chunks[next]);
        next += 1;
    }
    draw_status_bar(frame, app, main_chunks[next]);
    draw_footer(frame, app, main_chunks[next + 1]);
}
