//! Client layer for the remote link API
//!
//! The dashboard owns no storage: every read and mutation is a round trip to
//! the backend. Views depend on the [`LinkApi`] trait so they can be driven by
//! the HTTP implementation in production and by in-memory fakes in tests.
//!
//! # Architecture
//!
//! ```text
//! TUI / CLI → services (store, submitter, view, stats) → LinkApi ──→ HttpLinkClient ──→ backend /api
//! ```
//!
//! # Error policy
//!
//! - transport failure → `DashboardError::Network`
//! - 404 → `NotFound`, 409 → `Conflict`, other 4xx → `Validation`
//! - 5xx and anything unexpected → `Server`
//! - no retries at this layer

mod link_client;

pub use link_client::HttpLinkClient;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{CreateLinkRequest, LinkRecord};

/// The four operations of the link API.
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// `GET /links`
    async fn list_links(&self) -> Result<Vec<LinkRecord>>;

    /// `POST /links`
    async fn create_link(&self, request: &CreateLinkRequest) -> Result<LinkRecord>;

    /// `GET /links/:code`
    async fn get_link(&self, code: &str) -> Result<LinkRecord>;

    /// `DELETE /links/:code`
    async fn delete_link(&self, code: &str) -> Result<()>;
}
