//! TUI 常量定义

/// URL 显示截断长度（字符数）
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    pub const ADD_LINK: PopupSize = PopupSize::new(70, 55);
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(60, 40);
    pub const STATS: PopupSize = PopupSize::new(70, 60);
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

pub mod colors {
    use ratatui::style::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const MUTED: Color = Color::DarkGray;
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// Truncate to `max` characters, appending "..." when shortened.
pub fn truncate_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_display_is_char_safe() {
        assert_eq!(truncate_display("https://a.com", 50), "https://a.com");
        assert_eq!(truncate_display("abcdef", 3), "abc...");
        assert_eq!(truncate_display("äöüäöü", 2), "äö...");
    }
}
