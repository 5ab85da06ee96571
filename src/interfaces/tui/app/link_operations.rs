//! Link operations
//!
//! 网络操作都在后台任务中执行，完成后发送 AppEvent；
//! 主循环处理事件时再更新界面状态

use std::sync::Arc;

use tracing::{debug, warn};

use super::state::{App, AppEvent, CurrentScreen};
use crate::services::{FormStatusKind, MSG_DELETE_FAILED, SubmitOutcome};

impl App {
    /// Refetch the collection in the background.
    pub fn request_refresh(&mut self) {
        let store = Arc::clone(&self.ctx.store);
        let events = self.events();
        tokio::spawn(async move {
            let result = store.refresh().await;
            let _ = events.send(AppEvent::Refreshed(result));
        });
    }

    /// Submit the add-link form. Ignored while a submission is in flight.
    pub fn submit_form(&mut self) {
        if self.submitting || self.ctx.submitter.is_in_flight() {
            debug!("Submit ignored: already submitting");
            return;
        }

        // 本地校验失败时不发起任务，直接显示提示
        if let Err(e) = self.form.create.validate() {
            self.form.create.apply(&SubmitOutcome::Invalid(e));
            return;
        }

        let submitter = Arc::clone(&self.ctx.submitter);
        let store = Arc::clone(&self.ctx.store);
        let url = self.form.create.url.clone();
        let code = self.form.create.short_code.clone();
        let events = self.events();
        self.submitting = true;
        tokio::spawn(async move {
            let outcome = submitter.submit_and_refresh(&url, &code, &store).await;
            let _ = events.send(AppEvent::Submitted(outcome));
        });
    }

    /// Ask for confirmation before deleting the selected row.
    pub fn start_delete(&mut self) {
        if let Some(link) = self.selected_link() {
            self.ctx.view.request_delete(&link.short_code);
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.ctx.view.cancel_delete();
        self.current_screen = CurrentScreen::Main;
    }

    pub fn confirm_delete(&mut self) {
        self.current_screen = CurrentScreen::Main;
        let Some(code) = self.ctx.view.pending_delete() else {
            return;
        };

        self.deleting = Some(code.clone());
        let view = Arc::clone(&self.ctx.view);
        let events = self.events();
        tokio::spawn(async move {
            let result = view.confirm_delete().await;
            let _ = events.send(AppEvent::Deleted { code, result });
        });
    }

    /// Copy the selected row's short URL to the clipboard.
    pub fn copy_selected(&mut self) {
        if let Some(link) = self.selected_link() {
            self.copy_code(&link.short_code);
        }
    }

    /// Copy the short URL of the link shown in the stats view.
    pub fn copy_stats_link(&mut self) {
        let state = self.ctx.stats.state();
        if let Some(code) = state.code() {
            self.copy_code(code);
        }
    }

    fn copy_code(&mut self, code: &str) {
        match self.ctx.view.copy_short_url(code) {
            Ok(url) => self.set_status(format!("Copied: {}", url)),
            Err(e) => self.set_error(format!("Copy failed: {}", e.message())),
        }
    }

    /// Open the stats view for the selected row.
    pub fn open_stats(&mut self) {
        let Some(link) = self.selected_link() else {
            return;
        };
        self.current_screen = CurrentScreen::Stats;

        if let Some(ticket) = self.ctx.stats.activate(&link.short_code) {
            let stats = Arc::clone(&self.ctx.stats);
            let events = self.events();
            tokio::spawn(async move {
                if stats.run(&ticket).await {
                    let _ = events.send(AppEvent::StatsLoaded);
                }
            });
        }
    }

    pub fn close_stats(&mut self) {
        self.ctx.stats.abandon();
        self.current_screen = CurrentScreen::Main;
    }

    /// Apply the completion of a background operation.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Refreshed(Ok(count)) => {
                debug!("Refresh applied, {} links", count);
                self.clamp_selection();
            }
            AppEvent::Refreshed(Err(e)) => {
                self.set_error(format!("Failed to load links: {}", e.message()));
            }
            AppEvent::Submitted(outcome) => {
                self.submitting = false;
                self.form.create.apply(&outcome);
                if let Some(status) = &self.form.create.status
                    && status.kind == FormStatusKind::Success
                {
                    let message = status.message.clone();
                    self.set_status(message);
                }
                self.clamp_selection();
            }
            AppEvent::Deleted { code, result } => {
                self.deleting = None;
                match result {
                    Ok(Some(deleted)) => self.set_status(format!("Deleted: {}", deleted)),
                    Ok(None) => {}
                    Err(e) => {
                        warn!("Delete of '{}' failed: {}", code, e);
                        self.set_error(MSG_DELETE_FAILED);
                    }
                }
                self.clamp_selection();
            }
            AppEvent::StatsLoaded => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use crossterm::event::KeyCode;
    use parking_lot::Mutex;
    use tokio::sync::mpsc;

    use super::*;
    use crate::client::LinkApi;
    use crate::config::StaticConfig;
    use crate::errors::{DashboardError, Result};
    use crate::interfaces::tui::event_handler::handle_key_event;
    use crate::models::{CreateLinkRequest, LinkRecord};
    use crate::runtime::lifetime::DashboardContext;
    use crate::services::ClipboardSink;

    fn link(code: &str, url: &str) -> LinkRecord {
        LinkRecord {
            id: 1,
            short_code: code.to_string(),
            original_url: url.to_string(),
            click_count: 0,
            created_at: Utc::now(),
            last_clicked_at: None,
        }
    }

    #[derive(Default)]
    struct FakeApi {
        creates: AtomicUsize,
    }

    #[async_trait]
    impl LinkApi for FakeApi {
        async fn list_links(&self) -> Result<Vec<LinkRecord>> {
            Ok(vec![
                link("abc123", "https://a.com"),
                link("xyz789", "https://b.com"),
            ])
        }
        async fn create_link(&self, request: &CreateLinkRequest) -> Result<LinkRecord> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(link("gen0001", &request.url))
        }
        async fn get_link(&self, code: &str) -> Result<LinkRecord> {
            self.list_links()
                .await?
                .into_iter()
                .find(|l| l.short_code == code)
                .ok_or_else(|| DashboardError::not_found(code))
        }
        async fn delete_link(&self, _code: &str) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl ClipboardSink for Recorder {
        fn set_text(&self, text: &str) -> Result<()> {
            self.0.lock().push(text.to_string());
            Ok(())
        }
    }

    fn app(
        api: Arc<FakeApi>,
        clipboard: Arc<Recorder>,
    ) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let ctx = DashboardContext::new(Arc::new(StaticConfig::default()), api, clipboard)
            .expect("context");
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(ctx, tx), rx)
    }

    #[tokio::test]
    async fn test_form_locked_until_outcome_applied() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app(Arc::clone(&api), Arc::default());

        handle_key_event(&mut app, KeyCode::Char('a'));
        for c in "https://new.example".chars() {
            handle_key_event(&mut app, KeyCode::Char(c));
        }
        handle_key_event(&mut app, KeyCode::Enter);
        assert!(app.submitting);

        // a second Enter, typing and reopening the form change nothing
        handle_key_event(&mut app, KeyCode::Enter);
        handle_key_event(&mut app, KeyCode::Char('x'));
        handle_key_event(&mut app, KeyCode::Backspace);
        handle_key_event(&mut app, KeyCode::Esc);
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert_eq!(app.form.create.url, "https://new.example");

        let event = rx.recv().await.expect("submitted event");
        app.handle_app_event(event);

        assert!(!app.submitting);
        assert_eq!(api.creates.load(Ordering::SeqCst), 1);
        assert!(app.form.create.url.is_empty());
        assert_eq!(
            app.form.create.status.as_ref().map(|s| s.kind),
            Some(FormStatusKind::Success)
        );

        handle_key_event(&mut app, KeyCode::Char('h'));
        assert_eq!(app.form.create.url, "h");
    }

    #[tokio::test]
    async fn test_stats_copy_uses_shown_link() {
        let clipboard = Arc::new(Recorder::default());
        let (mut app, _rx) = app(Arc::new(FakeApi::default()), Arc::clone(&clipboard));
        app.ctx.store.refresh().await.unwrap();

        app.ctx.stats.lookup("xyz789").await;
        app.current_screen = CurrentScreen::Stats;
        app.selected_index = 0;

        handle_key_event(&mut app, KeyCode::Char('y'));
        assert_eq!(
            *clipboard.0.lock(),
            vec!["http://localhost:3000/xyz789".to_string()]
        );
    }
}
