//! Event handlers for link-related screens
//!
//! Handles: Main, AddLink, DeleteConfirm, Stats

use crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Esc => {
            if app.is_searching() {
                app.search_input.clear();
                app.jump_to_top();
            }
            app.clear_messages();
        }
        KeyCode::Char('/') => {
            app.inline_search_mode = true;
        }
        KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Enter | KeyCode::Char('v') => app.open_stats(),
        KeyCode::Char('a') | KeyCode::Char('A') => {
            // 提交中重新打开时保留原表单，结果稍后写回
            if !app.submitting {
                app.form.reset();
            }
            app.current_screen = CurrentScreen::AddLink;
        }
        KeyCode::Char('d') | KeyCode::Char('D') => app.start_delete(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.set_status("Refreshing...");
            app.request_refresh();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
}

/// Handle add link screen input
pub fn handle_add_link_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Tab | KeyCode::BackTab => handle_tab_navigation(app),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
}

/// Handle delete confirmation
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

/// Handle stats view
pub fn handle_stats_screen(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.close_stats(),
        KeyCode::Char('y') => app.copy_stats_link(),
        _ => {}
    }
}
