//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! - link_screens: Main, AddLink, DeleteConfirm, Stats
//! - misc_screens: inline search, Help, Exiting

use crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod link_screens;
mod misc_screens;

use link_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen. Returns true to exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        handle_inline_search(app, key_code);
        return false;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::AddLink => handle_add_link_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Stats => handle_stats_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => return handle_exiting_screen(app, key_code),
    }
    false
}
