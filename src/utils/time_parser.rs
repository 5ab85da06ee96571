use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub struct TimeParser;

/// 后端可能返回不带时区的时间戳（按 UTC 处理）
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl TimeParser {
    /// 解析时间字符串，支持：
    /// - RFC3339 格式：2023-10-01T12:00:00Z
    /// - 无时区格式：2023-10-01T12:00:00 / 2023-10-01 12:00:00.123
    pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, String> {
        let input = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }

        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
                return Ok(naive.and_utc());
            }
        }

        Err(format!("Invalid timestamp: '{}'", input))
    }

    /// 格式化为相对时间，如 "5 minutes ago"
    pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let secs = now.signed_duration_since(at).num_seconds();

        if secs < 0 {
            return "just now".to_string();
        }

        let (value, unit) = match secs {
            0..=44 => return "less than a minute ago".to_string(),
            45..=3599 => ((secs + 30) / 60, "minute"),
            3600..=86_399 => ((secs + 1800) / 3600, "hour"),
            86_400..=2_591_999 => ((secs + 43_200) / 86_400, "day"),
            2_592_000..=31_535_999 => ((secs + 1_296_000) / 2_592_000, "month"),
            _ => (secs / 31_536_000, "year"),
        };
        let value = value.max(1);

        if value == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", value, unit)
        }
    }

    /// 最近点击时间（表格列），从未点击时显示 "-"
    pub fn format_last_clicked(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        at.map(|t| Self::format_relative(t, now))
            .unwrap_or_else(|| "-".to_string())
    }

    /// 绝对时间（详情页）
    pub fn format_absolute(at: DateTime<Utc>) -> String {
        at.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    pub fn format_date(at: DateTime<Utc>) -> String {
        at.format("%Y-%m-%d").to_string()
    }
}

/// serde helper for timestamp fields
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    TimeParser::parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// serde helper for nullable timestamp fields
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => TimeParser::parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
