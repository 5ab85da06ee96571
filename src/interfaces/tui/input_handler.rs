//! Input handling utilities
//!
//! Text editing shared by the add-link form and the inline search bar

use super::app::App;

/// Handle text character input in the add-link form
pub fn handle_text_input(app: &mut App, c: char) {
    if app.submitting {
        return;
    }
    app.form.push_char(c);
    // 修改输入后清掉上一次提交的提示
    app.form.create.status = None;
}

/// Handle backspace in the add-link form
pub fn handle_backspace(app: &mut App) {
    if app.submitting {
        return;
    }
    app.form.pop_char();
    app.form.create.status = None;
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App) {
    app.form.toggle_field();
}

/// Append to the search query; the selection restarts at the first match
pub fn handle_search_input(app: &mut App, c: char) {
    app.search_input.push(c);
    app.jump_to_top();
}

pub fn handle_search_backspace(app: &mut App) {
    app.search_input.pop();
    app.jump_to_top();
}
