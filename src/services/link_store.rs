//! Collection store: the current snapshot of the link set
//!
//! The snapshot is always some complete list response from the backend.
//! It is swapped as a whole on refresh and never merged or patched.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use arc_swap::ArcSwap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::client::LinkApi;
use crate::errors::{DashboardError, Result};
use crate::models::LinkRecord;

pub struct LinkStore {
    api: Arc<dyn LinkApi>,
    snapshot: ArcSwap<Vec<LinkRecord>>,
    /// 最近一次发起的刷新序号
    issued: AtomicU64,
    /// 当前快照对应的刷新序号
    applied: Mutex<u64>,
    in_flight: AtomicUsize,
    loaded: AtomicBool,
    last_error: RwLock<Option<DashboardError>>,
}

/// Decrements the in-flight counter when a refresh ends, however it ends.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl LinkStore {
    pub fn new(api: Arc<dyn LinkApi>) -> Self {
        Self {
            api,
            snapshot: ArcSwap::from_pointee(Vec::new()),
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
            in_flight: AtomicUsize::new(0),
            loaded: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Current snapshot. Cheap; holds no lock.
    pub fn snapshot(&self) -> Arc<Vec<LinkRecord>> {
        self.snapshot.load_full()
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }

    /// True while at least one refresh is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// True once any refresh has succeeded.
    pub fn has_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// Error from the most recent refresh, cleared by the next success.
    pub fn last_error(&self) -> Option<DashboardError> {
        self.last_error.read().clone()
    }

    /// Fetch the full list and replace the snapshot.
    ///
    /// On failure the snapshot is left as it was and the error is recorded.
    /// A response is dropped if a later-issued refresh has already been
    /// applied, so overlapping refreshes never roll the snapshot back. A
    /// failure superseded that way is not recorded and returns the current
    /// snapshot length.
    pub async fn refresh(&self) -> Result<usize> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlight::enter(&self.in_flight);
        debug!("Refreshing link collection (ticket {})", ticket);

        match self.api.list_links().await {
            Ok(links) => {
                let count = links.len();
                let mut applied = self.applied.lock();
                if ticket > *applied {
                    self.snapshot.store(Arc::new(links));
                    *applied = ticket;
                    self.loaded.store(true, Ordering::SeqCst);
                    *self.last_error.write() = None;
                    info!("Loaded {} links", count);
                } else {
                    debug!(
                        "Discarding refresh {} (snapshot already at {})",
                        ticket, *applied
                    );
                }
                Ok(count)
            }
            Err(e) => {
                let applied = self.applied.lock();
                if ticket < *applied {
                    // 更新的刷新已经生效，快照是最新的
                    debug!(
                        "Ignoring failure of refresh {} (snapshot already at {}): {}",
                        ticket, *applied, e
                    );
                    return Ok(self.len());
                }
                warn!("Failed to load links: {}", e);
                *self.last_error.write() = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn find(&self, code: &str) -> Option<LinkRecord> {
        self.snapshot
            .load()
            .iter()
            .find(|link| link.short_code == code)
            .cloned()
    }
}
