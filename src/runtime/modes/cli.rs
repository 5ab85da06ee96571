//! CLI mode
//!
//! Runs a single command against the link API.

use std::sync::Arc;

use anyhow::Result;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::{run_cli_command, run_config_command};
use crate::runtime::lifetime::prepare_startup;
use crate::services::{ClipboardSink, NoClipboard};

pub async fn run_cli(config: Arc<StaticConfig>, command: Commands) -> Result<()> {
    // 生成配置不需要连接后端
    if let Commands::Config { action } = command {
        run_config_command(action)?;
        return Ok(());
    }

    // 一次性命令不需要剪贴板
    let clipboard: Arc<dyn ClipboardSink> = Arc::new(NoClipboard);
    let ctx = prepare_startup(config, clipboard)?;
    run_cli_command(&ctx, command).await?;
    Ok(())
}
