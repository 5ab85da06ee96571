//! 每行独立的 "已复制" 提示
//!
//! 复制后该行标记为 copied，固定时间窗口后自动恢复。
//! 每个标记对应一个可取消的定时任务：重复复制同一行会重置窗口，
//! 整个集合被 drop 时取消所有未完成的任务

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

pub struct CopyIndicators {
    window: Duration,
    /// code -> stamp of the copy that set it
    active: Arc<DashMap<String, u64>>,
    timers: Mutex<HashMap<String, JoinHandle<()>>>,
    next_stamp: AtomicU64,
}

impl CopyIndicators {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            active: Arc::new(DashMap::new()),
            timers: Mutex::new(HashMap::new()),
            next_stamp: AtomicU64::new(1),
        }
    }

    /// Mark `code` as copied and schedule the revert.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mark(&self, code: &str) {
        let stamp = self.next_stamp.fetch_add(1, Ordering::Relaxed);
        self.active.insert(code.to_string(), stamp);

        let active = Arc::clone(&self.active);
        let key = code.to_string();
        let window = self.window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // 只清除本次复制设置的标记
            active.remove_if(&key, |_, current| *current == stamp);
            trace!("Copy indicator for '{}' reverted", key);
        });

        let mut timers = self.timers.lock();
        timers.retain(|_, h| !h.is_finished());
        if let Some(previous) = timers.insert(code.to_string(), handle) {
            previous.abort();
        }
    }

    pub fn is_active(&self, code: &str) -> bool {
        self.active.contains_key(code)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Cancel every pending revert and clear all indicators.
    pub fn clear(&self) {
        for (_, handle) in self.timers.lock().drain() {
            handle.abort();
        }
        self.active.clear();
    }
}

impl Drop for CopyIndicators {
    fn drop(&mut self) {
        for (_, handle) in self.timers.get_mut().drain() {
            handle.abort();
        }
    }
}
