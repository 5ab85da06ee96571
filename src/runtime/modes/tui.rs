//! TUI mode
//!
//! Wires the services against the system clipboard and hands over to the
//! terminal dashboard.

use std::sync::Arc;

use anyhow::Result;

use crate::config::StaticConfig;
use crate::runtime::lifetime::prepare_startup;
use crate::services::SystemClipboard;

pub async fn run_tui(config: Arc<StaticConfig>) -> Result<()> {
    let ctx = prepare_startup(config, Arc::new(SystemClipboard))?;
    crate::interfaces::tui::run_tui(ctx).await
}
