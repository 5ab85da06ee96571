//! Clipboard seam used by the copy-short-URL action

use crate::errors::{DashboardError, Result};

pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via arboard. A fresh handle is opened per copy.
#[cfg(feature = "tui")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "tui")]
impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| DashboardError::clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| DashboardError::clipboard(e.to_string()))
    }
}

/// Used when no clipboard is available (headless CLI runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn set_text(&self, _text: &str) -> Result<()> {
        Err(DashboardError::clipboard("no clipboard available"))
    }
}
