//! Service layer for the link collection
//!
//! Front-end independent state and interaction logic shared by the
//! TUI and the CLI.

pub mod clipboard;
mod collection_view;
mod copy_indicator;
mod link_store;
mod link_submitter;
mod short_url;
mod stats_lookup;

pub use clipboard::{ClipboardSink, NoClipboard};
#[cfg(feature = "tui")]
pub use clipboard::SystemClipboard;
pub use collection_view::*;
pub use copy_indicator::CopyIndicators;
pub use link_store::LinkStore;
pub use link_submitter::*;
pub use short_url::ShortUrlResolver;
pub use stats_lookup::*;
