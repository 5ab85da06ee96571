//! System-level modules
//!
//! Process-wide setup shared by every execution mode: logging and the
//! panic hook.

pub mod logging;
pub mod panic_handler;

pub use logging::{LogTarget, init_logging};
pub use panic_handler::{RunMode, install_panic_hook};
