//! Service layer tests
//!
//! Drives the collection store, submitter, view and stats lookup against an
//! in-memory gateway, the same way the CLI and TUI wire them up.

mod common;

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use common::{MemoryLinkApi, RecordingClipboard, record};
use shortlinker_dashboard::client::LinkApi;
use shortlinker_dashboard::config::StaticConfig;
use shortlinker_dashboard::errors::{DashboardError, Result};
use shortlinker_dashboard::models::{CreateLinkRequest, LinkRecord};
use shortlinker_dashboard::runtime::lifetime::DashboardContext;
use shortlinker_dashboard::services::{
    CreateForm, FormStatusKind, LinkStore, LinkSubmitter, MSG_CODE_TAKEN, MSG_CREATED,
    NoClipboard, StatsState, SubmitOutcome,
};

fn context(api: Arc<MemoryLinkApi>) -> DashboardContext {
    DashboardContext::new(
        Arc::new(StaticConfig::default()),
        api,
        Arc::new(NoClipboard),
    )
    .expect("context")
}

fn codes(links: &[LinkRecord]) -> Vec<&str> {
    links.iter().map(|l| l.short_code.as_str()).collect()
}

// =============================================================================
// Collection store
// =============================================================================

#[tokio::test]
async fn test_refresh_replaces_snapshot() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));
    assert!(!ctx.store.has_loaded());
    assert!(ctx.store.is_empty());

    assert_eq!(ctx.store.refresh().await.unwrap(), 2);
    assert!(ctx.store.has_loaded());
    assert!(!ctx.store.is_loading());
    assert_eq!(codes(&ctx.store.snapshot()), vec!["abc123", "xyz789"]);
}

#[tokio::test]
async fn test_refresh_failure_keeps_snapshot() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));
    ctx.store.refresh().await.unwrap();

    api.fail_list.store(true, Ordering::SeqCst);
    assert!(ctx.store.refresh().await.is_err());
    assert_eq!(ctx.store.len(), 2);
    assert!(matches!(
        ctx.store.last_error(),
        Some(DashboardError::Server { status: 500, .. })
    ));

    api.fail_list.store(false, Ordering::SeqCst);
    ctx.store.refresh().await.unwrap();
    assert!(ctx.store.last_error().is_none());
}

/// Gateway whose list responses are released by the test, one per call.
/// Creates always succeed.
#[derive(Default)]
struct GatedList {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Vec<LinkRecord>>>>>,
    entered: AtomicUsize,
    creates: AtomicUsize,
}

impl GatedList {
    fn gate(&self) -> oneshot::Sender<Result<Vec<LinkRecord>>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }
}

#[async_trait]
impl LinkApi for GatedList {
    async fn list_links(&self) -> Result<Vec<LinkRecord>> {
        let gate = self.gates.lock().pop_front();
        self.entered.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| DashboardError::network("gate dropped"))?,
            None => Ok(vec![]),
        }
    }
    async fn create_link(&self, request: &CreateLinkRequest) -> Result<LinkRecord> {
        let n = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(record(n as i64, &format!("gen{:04}", n), &request.url))
    }
    async fn get_link(&self, code: &str) -> Result<LinkRecord> {
        Err(DashboardError::not_found(code))
    }
    async fn delete_link(&self, _code: &str) -> Result<()> {
        Ok(())
    }
}

async fn wait_entered(api: &GatedList, n: usize) {
    while api.entered.load(Ordering::SeqCst) < n {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_late_older_refresh_does_not_roll_back() {
    let api = Arc::new(GatedList::default());
    let older_tx = api.gate();
    let newer_tx = api.gate();

    let store = Arc::new(LinkStore::new(api.clone()));

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.refresh().await }
    });
    wait_entered(&api, 1).await;
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.refresh().await }
    });
    wait_entered(&api, 2).await;
    assert!(store.is_loading());

    newer_tx
        .send(Ok(vec![record(3, "new0001", "https://new.example")]))
        .unwrap();
    second.await.unwrap().unwrap();
    assert_eq!(codes(&store.snapshot()), vec!["new0001"]);

    older_tx
        .send(Ok(vec![
            record(1, "abc123", "https://a.com"),
            record(2, "xyz789", "https://b.com"),
        ]))
        .unwrap();
    first.await.unwrap().unwrap();

    assert_eq!(codes(&store.snapshot()), vec!["new0001"]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_late_older_failure_does_not_mark_store_failed() {
    let api = Arc::new(GatedList::default());
    let older_tx = api.gate();
    let newer_tx = api.gate();

    let store = Arc::new(LinkStore::new(api.clone()));

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.refresh().await }
    });
    wait_entered(&api, 1).await;
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.refresh().await }
    });
    wait_entered(&api, 2).await;

    newer_tx
        .send(Ok(vec![record(3, "new0001", "https://new.example")]))
        .unwrap();
    second.await.unwrap().unwrap();

    older_tx
        .send(Err(DashboardError::server(500, "old")))
        .unwrap();
    assert_eq!(first.await.unwrap().unwrap(), 1);

    assert_eq!(codes(&store.snapshot()), vec!["new0001"]);
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn test_latest_failure_is_recorded() {
    let api = Arc::new(GatedList::default());
    let older_tx = api.gate();
    let newer_tx = api.gate();

    let store = Arc::new(LinkStore::new(api.clone()));

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.refresh().await }
    });
    wait_entered(&api, 1).await;
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.refresh().await }
    });
    wait_entered(&api, 2).await;

    older_tx
        .send(Ok(vec![record(1, "abc123", "https://a.com")]))
        .unwrap();
    first.await.unwrap().unwrap();

    newer_tx
        .send(Err(DashboardError::server(500, "new")))
        .unwrap();
    assert!(second.await.unwrap().is_err());

    assert_eq!(codes(&store.snapshot()), vec!["abc123"]);
    assert!(store.last_error().is_some());
}

// =============================================================================
// Creating links
// =============================================================================

#[tokio::test]
async fn test_invalid_input_never_reaches_gateway() {
    let api = MemoryLinkApi::new();
    let submitter = LinkSubmitter::new(api.clone());

    assert_eq!(
        submitter.submit("", "").await,
        SubmitOutcome::Invalid(DashboardError::EmptyUrl)
    );
    assert!(matches!(
        submitter.submit("not a url", "").await,
        SubmitOutcome::Invalid(DashboardError::MalformedUrl(_))
    ));
    assert!(matches!(
        submitter.submit("https://example.com", "ab!").await,
        SubmitOutcome::Invalid(DashboardError::InvalidCodeFormat(_))
    ));
    assert_eq!(MemoryLinkApi::calls(&api.create_calls), 0);
    assert!(!submitter.is_in_flight());
}

#[tokio::test]
async fn test_create_then_refresh_shows_new_link() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));
    ctx.store.refresh().await.unwrap();

    let mut form = CreateForm::new();
    form.url = "https://new.example".into();
    form.short_code = "fresh01".into();

    let outcome = ctx
        .submitter
        .submit_and_refresh(&form.url.clone(), &form.short_code.clone(), &ctx.store)
        .await;
    form.apply(&outcome);

    assert!(matches!(outcome, SubmitOutcome::Created(ref r) if r.short_code == "fresh01"));
    assert!(ctx.store.find("fresh01").is_some());
    assert_eq!(MemoryLinkApi::calls(&api.list_calls), 2);
    assert!(form.url.is_empty() && form.short_code.is_empty());
    let status = form.status.unwrap();
    assert_eq!(status.kind, FormStatusKind::Success);
    assert_eq!(status.message, MSG_CREATED);
}

#[tokio::test]
async fn test_taken_code_keeps_inputs_and_skips_refresh() {
    let api = MemoryLinkApi::with_links(vec![record(1, "taken01", "https://t.com")]);
    let ctx = context(Arc::clone(&api));
    ctx.store.refresh().await.unwrap();

    let mut form = CreateForm {
        url: "https://example.com".into(),
        short_code: "taken01".into(),
        status: None,
    };
    let outcome = ctx
        .submitter
        .submit_and_refresh("https://example.com", "taken01", &ctx.store)
        .await;
    form.apply(&outcome);

    assert_eq!(outcome, SubmitOutcome::CodeTaken);
    assert_eq!(form.url, "https://example.com");
    assert_eq!(form.short_code, "taken01");
    assert_eq!(form.status.unwrap().message, MSG_CODE_TAKEN);
    assert_eq!(MemoryLinkApi::calls(&api.list_calls), 1);
}

#[tokio::test]
async fn test_create_succeeds_even_if_refresh_fails() {
    let api = MemoryLinkApi::new();
    let ctx = context(Arc::clone(&api));
    api.fail_list.store(true, Ordering::SeqCst);

    let outcome = ctx
        .submitter
        .submit_and_refresh("https://example.com", "", &ctx.store)
        .await;

    assert!(outcome.is_success());
    assert!(ctx.store.last_error().is_some());
    assert_eq!(api.codes(), vec!["gen0001"]);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_in_flight_is_ignored() {
    let api = MemoryLinkApi::new();
    *api.create_delay.lock() = Some(Duration::from_millis(500));
    let submitter = LinkSubmitter::new(api.clone());

    let (first, second) = tokio::join!(
        submitter.submit("https://a.example", ""),
        submitter.submit("https://b.example", ""),
    );

    assert!(first.is_success());
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(second.message(), None);
    assert_eq!(MemoryLinkApi::calls(&api.create_calls), 1);
    assert!(!submitter.is_in_flight());

    // released afterwards
    assert!(submitter.submit("https://c.example", "").await.is_success());
}

#[tokio::test]
async fn test_form_stays_busy_until_refresh_after_create() {
    let api = Arc::new(GatedList::default());
    let list_tx = api.gate();
    let store = Arc::new(LinkStore::new(api.clone()));
    let submitter = Arc::new(LinkSubmitter::new(api.clone()));

    let first = tokio::spawn({
        let submitter = Arc::clone(&submitter);
        let store = Arc::clone(&store);
        async move {
            submitter
                .submit_and_refresh("https://example.com", "", &store)
                .await
        }
    });
    // create done, refresh waiting on the gate
    wait_entered(&api, 1).await;
    assert!(submitter.is_in_flight());

    assert_eq!(
        submitter.submit("https://example.com", "").await,
        SubmitOutcome::Busy
    );
    assert_eq!(
        submitter
            .submit_and_refresh("https://example.com", "", &store)
            .await,
        SubmitOutcome::Busy
    );
    assert_eq!(api.creates.load(Ordering::SeqCst), 1);

    list_tx
        .send(Ok(vec![record(1, "gen0001", "https://example.com")]))
        .unwrap();
    assert!(first.await.unwrap().is_success());
    assert!(!submitter.is_in_flight());
    assert_eq!(codes(&store.snapshot()), vec!["gen0001"]);
}

// =============================================================================
// Collection view
// =============================================================================

#[tokio::test]
async fn test_visible_filters_snapshot() {
    let api = MemoryLinkApi::sample();
    let ctx = context(api);
    ctx.store.refresh().await.unwrap();

    assert_eq!(codes(&ctx.view.visible("")), vec!["abc123", "xyz789"]);
    assert_eq!(codes(&ctx.view.visible("ABC")), vec!["abc123"]);
    assert_eq!(codes(&ctx.view.visible("b.com")), vec!["xyz789"]);
    assert!(ctx.view.visible("zzz").is_empty());
    // the filter never touches the snapshot
    assert_eq!(ctx.store.len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_refreshes() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));
    ctx.store.refresh().await.unwrap();

    ctx.view.request_delete("abc123");
    assert_eq!(ctx.view.pending_delete().as_deref(), Some("abc123"));

    let deleted = ctx.view.confirm_delete().await.unwrap();
    assert_eq!(deleted.as_deref(), Some("abc123"));
    assert_eq!(codes(&ctx.store.snapshot()), vec!["xyz789"]);
    assert!(ctx.view.pending_delete().is_none());
}

#[tokio::test]
async fn test_cancelled_delete_sends_nothing() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));

    ctx.view.request_delete("abc123");
    assert_eq!(ctx.view.cancel_delete().as_deref(), Some("abc123"));
    assert_eq!(ctx.view.confirm_delete().await.unwrap(), None);
    assert_eq!(MemoryLinkApi::calls(&api.delete_calls), 0);
}

#[tokio::test]
async fn test_failed_delete_leaves_snapshot() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));
    ctx.store.refresh().await.unwrap();
    api.fail_delete.store(true, Ordering::SeqCst);

    ctx.view.request_delete("abc123");
    assert!(ctx.view.confirm_delete().await.is_err());
    assert_eq!(ctx.store.len(), 2);
    assert_eq!(MemoryLinkApi::calls(&api.list_calls), 1);
}

#[tokio::test(start_paused = true)]
async fn test_copy_marks_row_for_window() {
    let api = MemoryLinkApi::sample();
    let clipboard = Arc::new(RecordingClipboard::default());
    let config = Arc::new(StaticConfig::default());
    let window = Duration::from_millis(config.ui.copy_indicator_ms);
    let ctx = DashboardContext::new(config, api, clipboard.clone()).unwrap();

    let url = ctx.view.copy_short_url("abc123").unwrap();
    assert_eq!(url, "http://localhost:3000/abc123");
    assert_eq!(*clipboard.written.lock(), vec![url]);
    assert!(ctx.view.is_copied("abc123"));
    assert!(!ctx.view.is_copied("xyz789"));

    tokio::time::sleep(window + Duration::from_millis(1)).await;
    assert!(!ctx.view.is_copied("abc123"));
}

// =============================================================================
// Stats lookup
// =============================================================================

#[tokio::test]
async fn test_stats_lookup_found_and_missing() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));

    assert!(matches!(
        ctx.stats.lookup("xyz789").await,
        StatsState::Found(ref link) if link.original_url == "https://b.com"
    ));
    assert_eq!(
        ctx.stats.lookup("gone999").await,
        StatsState::NotFound {
            code: "gone999".into()
        }
    );
}

#[tokio::test]
async fn test_stats_result_for_previous_code_is_dropped() {
    let api = MemoryLinkApi::sample();
    let ctx = context(Arc::clone(&api));

    let first = ctx.stats.begin("abc123");
    let second = ctx.stats.begin("xyz789");

    assert!(!ctx.stats.run(&first).await);
    assert!(ctx.stats.state().is_loading());
    assert!(ctx.stats.run(&second).await);
    assert_eq!(ctx.stats.state().code(), Some("xyz789"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_zero_tick_rate_rejected() {
    let mut config = StaticConfig::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(config.validate(), Err(DashboardError::Config(_))));
}
