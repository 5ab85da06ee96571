//! Collection view: filter projection and row actions over the store
//!
//! 过滤只是对当前快照的派生视图，不修改快照；
//! 删除需要显式确认，成功后整体刷新

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::clipboard::ClipboardSink;
use super::copy_indicator::CopyIndicators;
use super::link_store::LinkStore;
use super::short_url::ShortUrlResolver;
use crate::client::LinkApi;
use crate::errors::Result;
use crate::models::LinkRecord;

pub const MSG_DELETE_FAILED: &str = "Failed to delete link";

/// Case-insensitive substring match on code or target URL.
/// An empty query returns every record, order preserved.
pub fn filter_links<'a>(links: &'a [LinkRecord], query: &str) -> Vec<&'a LinkRecord> {
    if query.is_empty() {
        return links.iter().collect();
    }
    let needle = query.to_lowercase();
    links
        .iter()
        .filter(|link| link.matches_lowercase(&needle))
        .collect()
}

pub struct CollectionView {
    api: Arc<dyn LinkApi>,
    store: Arc<LinkStore>,
    resolver: ShortUrlResolver,
    clipboard: Arc<dyn ClipboardSink>,
    copied: CopyIndicators,
    pending_delete: Mutex<Option<String>>,
}

impl CollectionView {
    pub fn new(
        api: Arc<dyn LinkApi>,
        store: Arc<LinkStore>,
        resolver: ShortUrlResolver,
        clipboard: Arc<dyn ClipboardSink>,
        copied: CopyIndicators,
    ) -> Self {
        Self {
            api,
            store,
            resolver,
            clipboard,
            copied,
            pending_delete: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Arc<LinkStore> {
        &self.store
    }

    pub fn resolver(&self) -> &ShortUrlResolver {
        &self.resolver
    }

    /// Filtered copy of the current snapshot.
    pub fn visible(&self, query: &str) -> Vec<LinkRecord> {
        let snapshot = self.store.snapshot();
        filter_links(&snapshot, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// First step of a delete: remember which row awaits confirmation.
    pub fn request_delete(&self, code: &str) {
        debug!("Delete requested for '{}'", code);
        *self.pending_delete.lock() = Some(code.to_string());
    }

    pub fn cancel_delete(&self) -> Option<String> {
        self.pending_delete.lock().take()
    }

    pub fn pending_delete(&self) -> Option<String> {
        self.pending_delete.lock().clone()
    }

    /// Confirm the pending delete. Returns the deleted code, or `None` if
    /// nothing was pending.
    pub async fn confirm_delete(&self) -> Result<Option<String>> {
        let Some(code) = self.pending_delete.lock().take() else {
            return Ok(None);
        };
        self.delete(&code).await?;
        Ok(Some(code))
    }

    /// Delete by code, then refresh. The snapshot is only ever changed by
    /// the refresh; a failed delete leaves it untouched.
    pub async fn delete(&self, code: &str) -> Result<()> {
        if let Err(e) = self.api.delete_link(code).await {
            warn!("{} '{}': {}", MSG_DELETE_FAILED, code, e);
            return Err(e);
        }
        info!("Deleted link '{}'", code);
        if let Err(e) = self.store.refresh().await {
            warn!("Refresh after delete failed: {}", e);
        }
        Ok(())
    }

    /// Resolve the public short URL, put it on the clipboard and light up
    /// the row's copied indicator. Returns the copied URL.
    pub fn copy_short_url(&self, code: &str) -> Result<String> {
        let url = self.resolver.resolve(code);
        self.clipboard.set_text(&url)?;
        self.copied.mark(code);
        debug!("Copied {} to clipboard", url);
        Ok(url)
    }

    pub fn is_copied(&self, code: &str) -> bool {
        self.copied.is_active(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(code: &str, url: &str) -> LinkRecord {
        LinkRecord {
            id: 0,
            short_code: code.to_string(),
            original_url: url.to_string(),
            click_count: 0,
            created_at: Utc::now(),
            last_clicked_at: None,
        }
    }

    fn sample() -> Vec<LinkRecord> {
        vec![
            link("abc123", "https://a.com"),
            link("xyz789", "https://b.com"),
        ]
    }

    fn codes(found: Vec<&LinkRecord>) -> Vec<&str> {
        found.into_iter().map(|l| l.short_code.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let links = sample();
        assert_eq!(codes(filter_links(&links, "")), vec!["abc123", "xyz789"]);
    }

    #[test]
    fn test_filter_by_code_or_url() {
        let links = sample();
        assert_eq!(codes(filter_links(&links, "abc")), vec!["abc123"]);
        assert_eq!(codes(filter_links(&links, "b.com")), vec!["xyz789"]);
        assert!(filter_links(&links, "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let links = sample();
        assert_eq!(codes(filter_links(&links, "ABC")), vec!["abc123"]);
        assert_eq!(codes(filter_links(&links, "HTTPS://B")), vec!["xyz789"]);
    }
}
