//! Startup wiring
//!
//! 根据配置构造 API 客户端和各个服务，CLI 与 TUI 共用

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::client::{HttpLinkClient, LinkApi};
use crate::config::StaticConfig;
use crate::services::{
    ClipboardSink, CollectionView, CopyIndicators, LinkStore, LinkSubmitter, ShortUrlResolver,
    StatsLookup,
};

/// Everything a front-end needs, wired against one API gateway.
pub struct DashboardContext {
    pub config: Arc<StaticConfig>,
    pub api: Arc<dyn LinkApi>,
    pub store: Arc<LinkStore>,
    pub view: Arc<CollectionView>,
    pub submitter: Arc<LinkSubmitter>,
    pub stats: Arc<StatsLookup>,
}

impl DashboardContext {
    /// Wire the services around an existing gateway.
    pub fn new(
        config: Arc<StaticConfig>,
        api: Arc<dyn LinkApi>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Result<Self> {
        let resolver = ShortUrlResolver::from_config(&config.resolver)
            .context("Invalid [resolver] configuration")?;
        let store = Arc::new(LinkStore::new(Arc::clone(&api)));
        let copied = CopyIndicators::new(Duration::from_millis(config.ui.copy_indicator_ms));
        let view = Arc::new(CollectionView::new(
            Arc::clone(&api),
            Arc::clone(&store),
            resolver,
            clipboard,
            copied,
        ));

        Ok(Self {
            submitter: Arc::new(LinkSubmitter::new(Arc::clone(&api))),
            stats: Arc::new(StatsLookup::new(Arc::clone(&api))),
            config,
            api,
            store,
            view,
        })
    }
}

/// Build the context for a run: HTTP gateway from `[api]`, services on top.
pub fn prepare_startup(
    config: Arc<StaticConfig>,
    clipboard: Arc<dyn ClipboardSink>,
) -> Result<DashboardContext> {
    debug!("Preparing dashboard context");
    let client = HttpLinkClient::from_config(&config.api)
        .with_context(|| format!("Invalid API base URL '{}'", config.api.base_url))?;
    info!("Using link API at {}", client.base_url());

    DashboardContext::new(config, Arc::new(client), clipboard)
}
