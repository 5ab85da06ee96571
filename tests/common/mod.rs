//! Shared fakes for service-level tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use shortlinker_dashboard::client::LinkApi;
use shortlinker_dashboard::errors::{DashboardError, Result};
use shortlinker_dashboard::models::{CreateLinkRequest, LinkRecord};
use shortlinker_dashboard::services::ClipboardSink;

pub fn record(id: i64, code: &str, url: &str) -> LinkRecord {
    LinkRecord {
        id,
        short_code: code.to_string(),
        original_url: url.to_string(),
        click_count: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        last_clicked_at: None,
    }
}

/// In-memory stand-in for the backend, with call counters and failure switches.
#[derive(Default)]
pub struct MemoryLinkApi {
    links: Mutex<Vec<LinkRecord>>,
    next_id: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_delete: AtomicBool,
    /// Artificial latency for create, to hold a submission in flight
    pub create_delay: Mutex<Option<Duration>>,
}

impl MemoryLinkApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_links(links: Vec<LinkRecord>) -> Arc<Self> {
        let api = Self::default();
        api.next_id.store(links.len(), Ordering::SeqCst);
        *api.links.lock() = links;
        Arc::new(api)
    }

    pub fn sample() -> Arc<Self> {
        Self::with_links(vec![
            record(1, "abc123", "https://a.com"),
            record(2, "xyz789", "https://b.com"),
        ])
    }

    pub fn codes(&self) -> Vec<String> {
        self.links.lock().iter().map(|l| l.short_code.clone()).collect()
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkApi for MemoryLinkApi {
    async fn list_links(&self) -> Result<Vec<LinkRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(DashboardError::server(500, "list failed"));
        }
        Ok(self.links.lock().clone())
    }

    async fn create_link(&self, request: &CreateLinkRequest) -> Result<LinkRecord> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.create_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(DashboardError::server(500, "create failed"));
        }

        let mut links = self.links.lock();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let code = match &request.short_code {
            Some(code) if links.iter().any(|l| &l.short_code == code) => {
                return Err(DashboardError::conflict("Short code already exists"));
            }
            Some(code) => code.clone(),
            None => format!("gen{:04}", id),
        };
        let created = record(id, &code, &request.url);
        links.push(created.clone());
        Ok(created)
    }

    async fn get_link(&self, code: &str) -> Result<LinkRecord> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.links
            .lock()
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
            .ok_or_else(|| DashboardError::not_found(code))
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(DashboardError::server(500, "delete failed"));
        }
        let mut links = self.links.lock();
        let before = links.len();
        links.retain(|l| l.short_code != code);
        if links.len() == before {
            return Err(DashboardError::not_found(code));
        }
        Ok(())
    }
}

/// Clipboard that remembers what was written
#[derive(Default)]
pub struct RecordingClipboard {
    pub written: Mutex<Vec<String>>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        self.written.lock().push(text.to_string());
        Ok(())
    }
}
