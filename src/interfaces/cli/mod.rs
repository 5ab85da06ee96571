//! CLI interface module
//!
//! One-shot commands over the same services the dashboard uses.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::DashboardError;
use crate::runtime::lifetime::DashboardContext;
use commands::{config_generate, create_link, delete_link, link_stats, list_links, print_short_url};

#[derive(Debug)]
pub enum CliError {
    /// The link API rejected or failed the request
    ApiError(DashboardError),
    /// Input rejected before anything was sent
    InputError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(e) => e.format_simple(),
            CliError::InputError(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(e) => e.format_colored(),
            CliError::InputError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<DashboardError> for CliError {
    fn from(err: DashboardError) -> Self {
        if err.is_client_side() {
            CliError::InputError(err.message().to_string())
        } else {
            CliError::ApiError(err)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// `config generate` needs neither the API nor the services.
pub fn run_config_command(action: ConfigCommands) -> Result<(), CliError> {
    match action {
        ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(ctx: &DashboardContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::List { search } => list_links(ctx, search.as_deref().unwrap_or("")).await,

        Commands::Create { url, code } => {
            create_link(ctx, &url, code.as_deref().unwrap_or("")).await
        }

        Commands::Stats { code } => link_stats(ctx, &code).await,

        Commands::Delete { code, yes } => delete_link(ctx, &code, yes).await,

        Commands::Url { code } => {
            print_short_url(ctx, &code);
            Ok(())
        }

        Commands::Config { action } => run_config_command(action),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started from main, not as a CLI command".to_string(),
        )),
    }
}
