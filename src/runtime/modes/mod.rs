//! Mode routing
//!
//! - CLI mode: one command, then exit
//! - TUI mode: interactive dashboard (the default when no command is given)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;
