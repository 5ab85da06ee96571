use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use shortlinker_dashboard::cli::{Cli, Commands};
use shortlinker_dashboard::config::{StaticConfig, init_config, set_config};
#[cfg(feature = "cli")]
use shortlinker_dashboard::interfaces::cli::CliError;
use shortlinker_dashboard::runtime::modes;
use shortlinker_dashboard::system::{LogTarget, RunMode, init_logging, install_panic_hook};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        report(&err);
        std::process::exit(1);
    }
}

fn report(err: &anyhow::Error) {
    #[cfg(feature = "cli")]
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        eprintln!("{}", cli_err.format_colored());
        return;
    }
    eprintln!("Error: {:#}", err);
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = init_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = match cli.api_url {
        Some(api_url) => {
            let mut overridden = StaticConfig::clone(&config);
            overridden.api.base_url = api_url;
            overridden.validate()?;
            set_config(overridden.clone());
            Arc::new(overridden)
        }
        None => config,
    };

    #[cfg(feature = "tui")]
    let command = match cli.command {
        None | Some(Commands::Tui) => None,
        Some(cmd) => Some(cmd),
    };
    #[cfg(not(feature = "tui"))]
    let command = cli.command;

    let (mode, target) = match command {
        None => (RunMode::Tui, LogTarget::Terminal),
        Some(_) => (RunMode::Cli, LogTarget::Console),
    };
    install_panic_hook(mode);
    let _guard = init_logging(&config.logging, target)?;
    debug!("Configuration loaded: api={}", config.api.base_url);

    match command {
        #[cfg(feature = "cli")]
        Some(cmd) => modes::run_cli(config, cmd).await,
        #[cfg(not(feature = "cli"))]
        Some(_) => anyhow::bail!("CLI support is not compiled in"),
        #[cfg(feature = "tui")]
        None => modes::run_tui(config).await,
        #[cfg(not(feature = "tui"))]
        None => anyhow::bail!("TUI support is not compiled in; pass a command"),
    }
}
