//! Single-link statistics lookup
//!
//! 每次进入统计页面都会换一个 generation；
//! 旧 generation 的请求结果返回时直接丢弃

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::client::LinkApi;
use crate::models::LinkRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum StatsState {
    #[default]
    Idle,
    Loading {
        code: String,
    },
    Found(LinkRecord),
    /// Any lookup failure, not only 404
    NotFound {
        code: String,
    },
}

impl StatsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, StatsState::Loading { .. })
    }

    /// Code this state is about, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            StatsState::Idle => None,
            StatsState::Loading { code } | StatsState::NotFound { code } => Some(code),
            StatsState::Found(link) => Some(&link.short_code),
        }
    }
}

/// Identifies one lookup. Results carrying a stale ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    code: String,
}

impl LookupTicket {
    pub fn code(&self) -> &str {
        &self.code
    }
}

struct Inner {
    generation: u64,
    state: StatsState,
}

pub struct StatsLookup {
    api: Arc<dyn LinkApi>,
    inner: Mutex<Inner>,
}

impl StatsLookup {
    pub fn new(api: Arc<dyn LinkApi>) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                generation: 0,
                state: StatsState::Idle,
            }),
        }
    }

    pub fn state(&self) -> StatsState {
        self.inner.lock().state.clone()
    }

    /// Enter the loading state for `code`, invalidating any earlier lookup.
    pub fn begin(&self, code: &str) -> LookupTicket {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state = StatsState::Loading {
            code: code.to_string(),
        };
        debug!("Stats lookup #{} for '{}'", inner.generation, code);
        LookupTicket {
            generation: inner.generation,
            code: code.to_string(),
        }
    }

    /// Like [`begin`](Self::begin), but returns `None` when `code` is already
    /// the subject of the current state, so it is not fetched twice.
    pub fn activate(&self, code: &str) -> Option<LookupTicket> {
        if self.inner.lock().state.code() == Some(code) {
            return None;
        }
        Some(self.begin(code))
    }

    /// Apply a finished lookup. Returns false if the ticket was stale.
    pub fn finish(&self, ticket: &LookupTicket, result: crate::errors::Result<LinkRecord>) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != ticket.generation {
            debug!(
                "Dropping stale stats result for '{}' (#{} < #{})",
                ticket.code, ticket.generation, inner.generation
            );
            return false;
        }
        inner.state = match result {
            Ok(link) => StatsState::Found(link),
            Err(e) => {
                warn!("Stats lookup for '{}' failed: {}", ticket.code, e);
                StatsState::NotFound {
                    code: ticket.code.clone(),
                }
            }
        };
        true
    }

    /// Issue the request for a ticket and apply the result.
    pub async fn run(&self, ticket: &LookupTicket) -> bool {
        let result = self.api.get_link(&ticket.code).await;
        self.finish(ticket, result)
    }

    /// Begin and run a lookup in one go.
    pub async fn lookup(&self, code: &str) -> StatsState {
        let ticket = self.begin(code);
        self.run(&ticket).await;
        self.state()
    }

    /// Leave the stats view; any in-flight result will be dropped.
    pub fn abandon(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state = StatsState::Idle;
    }
}
