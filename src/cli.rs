//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Shortlinker Dashboard - manage short links from the terminal
#[derive(Parser, Debug)]
#[command(name = "shortlinker-dashboard")]
#[command(version)]
#[command(about = "Create, search, inspect and delete short links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: dashboard.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the link API base URL (e.g. http://localhost:3000/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive dashboard (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List short links
    List {
        /// Only show links whose code or URL contains this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Create a short link
    Create {
        /// Target URL
        url: String,

        /// Custom short code (6-8 letters or digits)
        #[arg(long)]
        code: Option<String>,
    },

    /// Show click statistics for one link
    Stats {
        /// Short code
        code: String,
    },

    /// Delete a short link
    Delete {
        /// Short code
        code: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the public short URL for a code
    Url {
        /// Short code
        code: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: stdout)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
