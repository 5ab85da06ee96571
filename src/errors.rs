use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// 传输层失败，没有收到响应
    Network(String),
    /// 5xx 或无法识别的响应
    Server { status: u16, message: String },
    /// 4xx（非 404/409），请求被后端判定为无效
    Validation(String),
    /// 409，短码已被占用
    Conflict(String),
    /// 404，短码不存在
    NotFound(String),
    EmptyUrl,
    MalformedUrl(String),
    InvalidCodeFormat(String),
    Serialization(String),
    Config(String),
    Clipboard(String),
    Terminal(String),
}

impl DashboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::Network(_) => "E001",
            DashboardError::Server { .. } => "E002",
            DashboardError::Validation(_) => "E003",
            DashboardError::Conflict(_) => "E004",
            DashboardError::NotFound(_) => "E005",
            DashboardError::EmptyUrl => "E006",
            DashboardError::MalformedUrl(_) => "E007",
            DashboardError::InvalidCodeFormat(_) => "E008",
            DashboardError::Serialization(_) => "E009",
            DashboardError::Config(_) => "E010",
            DashboardError::Clipboard(_) => "E011",
            DashboardError::Terminal(_) => "E012",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DashboardError::Network(_) => "Network Error",
            DashboardError::Server { .. } => "Server Error",
            DashboardError::Validation(_) => "Validation Error",
            DashboardError::Conflict(_) => "Conflict",
            DashboardError::NotFound(_) => "Resource Not Found",
            DashboardError::EmptyUrl => "Empty URL",
            DashboardError::MalformedUrl(_) => "Malformed URL",
            DashboardError::InvalidCodeFormat(_) => "Invalid Code Format",
            DashboardError::Serialization(_) => "Serialization Error",
            DashboardError::Config(_) => "Configuration Error",
            DashboardError::Clipboard(_) => "Clipboard Error",
            DashboardError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DashboardError::Network(msg) => msg,
            DashboardError::Server { message, .. } => message,
            DashboardError::Validation(msg) => msg,
            DashboardError::Conflict(msg) => msg,
            DashboardError::NotFound(msg) => msg,
            DashboardError::EmptyUrl => "URL is required.",
            DashboardError::MalformedUrl(msg) => msg,
            DashboardError::InvalidCodeFormat(msg) => msg,
            DashboardError::Serialization(msg) => msg,
            DashboardError::Config(msg) => msg,
            DashboardError::Clipboard(msg) => msg,
            DashboardError::Terminal(msg) => msg,
        }
    }

    /// Raised locally by the create form before any request is sent.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            DashboardError::EmptyUrl
                | DashboardError::MalformedUrl(_)
                | DashboardError::InvalidCodeFormat(_)
        )
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DashboardError {}

// 便捷的构造函数
impl DashboardError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        DashboardError::Network(msg.into())
    }

    pub fn server<T: Into<String>>(status: u16, msg: T) -> Self {
        DashboardError::Server {
            status,
            message: msg.into(),
        }
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DashboardError::Validation(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        DashboardError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        DashboardError::NotFound(msg.into())
    }

    pub fn malformed_url<T: Into<String>>(msg: T) -> Self {
        DashboardError::MalformedUrl(msg.into())
    }

    pub fn invalid_code_format<T: Into<String>>(msg: T) -> Self {
        DashboardError::InvalidCodeFormat(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DashboardError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        DashboardError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        DashboardError::Clipboard(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        DashboardError::Terminal(msg.into())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for DashboardError {
    fn from(err: url::ParseError) -> Self {
        DashboardError::Config(format!("invalid URL: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
