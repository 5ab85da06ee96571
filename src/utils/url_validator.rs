//! 创建表单的输入校验
//!
//! URL 必须能被解析为绝对 URL；自定义短码为 6-8 位 ASCII 字母数字

use url::Url;

use crate::errors::DashboardError;

/// 自定义短码最短长度
pub const MIN_SHORT_CODE_LENGTH: usize = 6;
/// 自定义短码最长长度
pub const MAX_SHORT_CODE_LENGTH: usize = 8;

/// Validate the target URL of a create request.
///
/// Only an empty string is treated as "missing"; anything else must parse as
/// an absolute URL, whitespace-only input included.
pub fn validate_url(url: &str) -> Result<(), DashboardError> {
    if url.is_empty() {
        return Err(DashboardError::EmptyUrl);
    }

    Url::parse(url).map_err(|e| DashboardError::malformed_url(e.to_string()))?;

    Ok(())
}

/// Validate an optional custom short code. Empty means "let the backend pick".
pub fn validate_short_code(code: &str) -> Result<(), DashboardError> {
    if code.is_empty() {
        return Ok(());
    }

    let len_ok = (MIN_SHORT_CODE_LENGTH..=MAX_SHORT_CODE_LENGTH).contains(&code.len());
    if !len_ok || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(DashboardError::invalid_code_format(format!(
            "'{}' is not {}-{} alphanumeric characters",
            code, MIN_SHORT_CODE_LENGTH, MAX_SHORT_CODE_LENGTH
        )));
    }

    Ok(())
}

/// 获取校验错误的用户友好消息
pub fn validation_error_message(error: &DashboardError) -> &'static str {
    match error {
        DashboardError::EmptyUrl => "URL is required.",
        DashboardError::MalformedUrl(_) => {
            "Please enter a valid URL (e.g., https://example.com)."
        }
        DashboardError::InvalidCodeFormat(_) => "Custom code must be 6-8 alphanumeric characters.",
        _ => "Invalid input.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("ftp://files.example.com/a.txt").is_ok());
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(validate_url(""), Err(DashboardError::EmptyUrl)));
    }

    #[test]
    fn test_malformed_urls() {
        for input in ["   ", "example.com", "not a url", "/relative/path", "http://"] {
            assert!(
                matches!(validate_url(input), Err(DashboardError::MalformedUrl(_))),
                "expected MalformedUrl for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_short_code_accepts_six_to_eight_alphanumerics() {
        for code in ["abc123", "ABCdef1", "a1b2c3d4", "000000"] {
            assert!(validate_short_code(code).is_ok(), "{} should pass", code);
        }
        assert!(validate_short_code("").is_ok());
    }

    #[test]
    fn test_short_code_rejections() {
        for code in ["abc12", "abc123456", "abc-12", "abc_123", "abc 123", "!!!!!!", "café12"] {
            assert!(
                matches!(
                    validate_short_code(code),
                    Err(DashboardError::InvalidCodeFormat(_))
                ),
                "{} should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            validation_error_message(&DashboardError::EmptyUrl),
            "URL is required."
        );
        assert_eq!(
            validation_error_message(&DashboardError::invalid_code_format("x")),
            "Custom code must be 6-8 alphanumeric characters."
        );
    }
}
