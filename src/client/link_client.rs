//! HTTP implementation of [`LinkApi`] on top of ureq
//!
//! ureq 是同步客户端，请求放在 spawn_blocking 中执行，调用方保持异步

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use ureq::Agent;
use url::Url;

use super::LinkApi;
use crate::config::ApiConfig;
use crate::errors::{DashboardError, Result};
use crate::models::{ApiErrorBody, CreateLinkRequest, LinkRecord};

/// 请求方法（仅限本 API 用到的几种）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Status code and raw body of a completed round trip.
#[derive(Debug)]
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Typed client for `<base>/links`.
///
/// The base origin is fixed at construction; cloning shares the connection
/// pool of the underlying agent.
#[derive(Clone)]
pub struct HttpLinkClient {
    base_url: String,
    agent: Agent,
}

impl HttpLinkClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(DashboardError::config(format!(
                "API base URL '{}' cannot be used as a base",
                base_url
            )));
        }

        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            agent,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let timeout = match config.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(&config.base_url, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn links_url(&self) -> String {
        format!("{}/links", self.base_url)
    }

    fn link_url(&self, code: &str) -> String {
        format!("{}/links/{}", self.base_url, urlencoding::encode(code))
    }

    /// 同步执行一次请求（在 spawn_blocking 中调用）
    fn execute_sync(
        agent: &Agent,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse> {
        let result = match (method, body) {
            (Method::Get, _) => agent
                .get(url)
                .header("Accept", "application/json")
                .call(),
            (Method::Delete, _) => agent
                .delete(url)
                .header("Accept", "application/json")
                .call(),
            (Method::Post, Some(body)) => agent
                .post(url)
                .header("Accept", "application/json")
                .send_json(body),
            (Method::Post, None) => agent.post(url).send_empty(),
        };

        let mut response = result.map_err(|e| {
            warn!("{} {} failed: {}", method.as_str(), url, e);
            DashboardError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(|e| {
            warn!("{} {} body read failed: {}", method.as_str(), url, e);
            DashboardError::network(e.to_string())
        })?;

        debug!("{} {} -> {}", method.as_str(), url, status);
        Ok(RawResponse { status, body })
    }

    /// 异步包装
    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || Self::execute_sync(&agent, method, &url, body.as_ref()))
            .await
            .unwrap_or_else(|e| {
                warn!("Link API spawn_blocking failed: {}", e);
                Err(DashboardError::network(format!("request task failed: {}", e)))
            })
    }
}

/// Map a non-2xx response onto the error taxonomy.
pub(crate) fn status_error(status: u16, body: &str, subject: &str) -> DashboardError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("{} returned HTTP {}", subject, status));

    match status {
        404 => DashboardError::not_found(message),
        409 => DashboardError::conflict(message),
        400..=499 => DashboardError::validation(message),
        _ => DashboardError::server(status, message),
    }
}

fn decode<T: DeserializeOwned>(response: &RawResponse, subject: &str) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| {
        warn!("{} returned an undecodable body: {}", subject, e);
        trace!("Undecodable body: {}", response.body);
        DashboardError::server(
            response.status,
            format!("{} returned an invalid body: {}", subject, e),
        )
    })
}

#[async_trait]
impl LinkApi for HttpLinkClient {
    async fn list_links(&self) -> Result<Vec<LinkRecord>> {
        let response = self.execute(Method::Get, self.links_url(), None).await?;
        if !response.is_success() {
            return Err(status_error(response.status, &response.body, "list links"));
        }
        decode(&response, "list links")
    }

    async fn create_link(&self, request: &CreateLinkRequest) -> Result<LinkRecord> {
        let body = serde_json::to_value(request)?;
        let response = self
            .execute(Method::Post, self.links_url(), Some(body))
            .await?;
        if !response.is_success() {
            return Err(status_error(response.status, &response.body, "create link"));
        }
        decode(&response, "create link")
    }

    async fn get_link(&self, code: &str) -> Result<LinkRecord> {
        let response = self.execute(Method::Get, self.link_url(code), None).await?;
        if !response.is_success() {
            return Err(status_error(
                response.status,
                &response.body,
                &format!("link '{}'", code),
            ));
        }
        decode(&response, &format!("link '{}'", code))
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        let response = self
            .execute(Method::Delete, self.link_url(code), None)
            .await?;
        if !response.is_success() {
            return Err(status_error(
                response.status,
                &response.body,
                &format!("link '{}'", code),
            ));
        }
        Ok(())
    }
}
