//! Link record model shared by the gateway, the store and the views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time_parser::{deserialize_optional_timestamp, deserialize_timestamp};

/// A shortened link as returned by the backend. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub click_count: u64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// `None` 表示从未被点击
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl LinkRecord {
    pub fn was_clicked(&self) -> bool {
        self.last_clicked_at.is_some()
    }

    /// Case-insensitive substring match against the code or the target URL.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.short_code.to_lowercase().contains(needle)
            || self.original_url.to_lowercase().contains(needle)
    }
}

/// Body of `POST /links`. The code is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
    #[serde(rename = "shortCode", default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

impl CreateLinkRequest {
    /// Build a request from raw form input; an empty code becomes `None`.
    pub fn new(url: impl Into<String>, short_code: impl Into<String>) -> Self {
        let short_code = short_code.into();
        Self {
            url: url.into(),
            short_code: if short_code.is_empty() {
                None
            } else {
                Some(short_code)
            },
        }
    }
}

/// `{ "error": "..." }` body the backend sends with failures
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
