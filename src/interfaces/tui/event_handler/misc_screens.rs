//! Event handlers for miscellaneous screens
//!
//! Handles: inline search, Help, Exiting

use crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{handle_search_backspace, handle_search_input};

/// Inline search bar: the filter applies while typing
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) {
    match key_code {
        // 保留查询，只退出输入模式
        KeyCode::Enter => app.inline_search_mode = false,
        KeyCode::Esc => {
            app.inline_search_mode = false;
            app.search_input.clear();
            app.jump_to_top();
        }
        KeyCode::Backspace => handle_search_backspace(app),
        KeyCode::Char(c) => handle_search_input(app, c),
        _ => {}
    }
}

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
        app.current_screen = CurrentScreen::Main;
    }
}

/// Returns true when the user confirms quitting
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            false
        }
        _ => false,
    }
}
