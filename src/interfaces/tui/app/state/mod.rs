//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，网络操作的结果通过 AppEvent 回到主循环

mod form_state;

pub use form_state::{EditingField, FormState};

use ratatui::widgets::TableState;
use tokio::sync::mpsc::UnboundedSender;

use crate::errors::Result;
use crate::models::LinkRecord;
use crate::runtime::lifetime::DashboardContext;
use crate::services::SubmitOutcome;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    AddLink,
    DeleteConfirm,
    Stats,
    Help,
    Exiting,
}

/// Completion of a background operation
#[derive(Debug)]
pub enum AppEvent {
    Refreshed(Result<usize>),
    Submitted(SubmitOutcome),
    Deleted {
        code: String,
        result: Result<Option<String>>,
    },
    /// The stats lookup finished; its state lives in the lookup itself
    StatsLoaded,
}

pub struct App {
    pub ctx: DashboardContext,
    pub current_screen: CurrentScreen,

    // Form state for add
    pub form: FormState,
    /// 从按下 Enter 到结果应用到表单之前为 true
    pub submitting: bool,

    // Search functionality
    pub search_input: String,
    pub inline_search_mode: bool,

    // UI state
    pub selected_index: usize,
    pub table_state: TableState,
    pub status_message: String,
    pub error_message: String,
    pub deleting: Option<String>,

    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(ctx: DashboardContext, events: UnboundedSender<AppEvent>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            ctx,
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            submitting: false,
            search_input: String::new(),
            inline_search_mode: false,
            selected_index: 0,
            table_state,
            status_message: String::new(),
            error_message: String::new(),
            deleting: None,
            events,
        }
    }

    pub(crate) fn events(&self) -> UnboundedSender<AppEvent> {
        self.events.clone()
    }

    /// Active search query (empty = no filter)
    pub fn search_query(&self) -> &str {
        &self.search_input
    }

    pub fn is_searching(&self) -> bool {
        !self.search_input.is_empty()
    }

    /// Links to display: the current snapshot filtered by the search query
    pub fn display_links(&self) -> Vec<LinkRecord> {
        self.ctx.view.visible(self.search_query())
    }

    pub fn display_count(&self) -> usize {
        self.display_links().len()
    }

    pub fn selected_link(&self) -> Option<LinkRecord> {
        self.display_links().into_iter().nth(self.selected_index)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }
}
