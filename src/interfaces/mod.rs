//! User-facing front-ends: one-shot CLI and the interactive terminal dashboard

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
