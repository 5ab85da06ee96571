use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

/// Plain environment variable carrying the API base origin. Takes precedence
/// over both the TOML file and `SLD__API__BASE_URL`.
pub const API_URL_ENV: &str = "SHORTLINKER_API_URL";

/// 静态配置（从 TOML 加载，启动时读取一次）
///
/// - api: 后端 API 地址与超时
/// - resolver: 短链公开地址的解析规则
/// - ui: 终端界面参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：SHORTLINKER_API_URL > ENV > TOML > 默认值
    /// ENV 前缀：SLD，分隔符：__
    /// 示例：SLD__API__BASE_URL=https://links.example.com/api
    pub fn load(path: Option<&str>) -> Result<Self, DashboardError> {
        use config::{Config, Environment, File};

        let explicit = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            // 显式指定的文件必须存在
            .add_source(File::with_name(path).required(explicit))
            .add_source(
                Environment::with_prefix("SLD")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings = builder
            .build()
            .map_err(|e| DashboardError::config(format!("Failed to build config: {}", e)))?;
        let mut config = settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| DashboardError::config(format!("Failed to deserialize config: {}", e)))?;

        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            config.api.base_url = url.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later, on the first request.
    pub fn validate(&self) -> Result<(), DashboardError> {
        url::Url::parse(&self.api.base_url).map_err(|e| {
            DashboardError::config(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        url::Url::parse(&self.resolver.origin).map_err(|e| {
            DashboardError::config(format!("resolver.origin '{}': {}", self.resolver.origin, e))
        })?;
        if self.ui.tick_rate_ms == 0 {
            return Err(DashboardError::config("ui.tick_rate_ms must be > 0"));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// 0 表示使用传输层默认值
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

/// 短链公开地址解析配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfig {
    /// Origin the dashboard is served from (the "current host").
    #[serde(default = "default_resolver_origin")]
    pub origin: String,
    #[serde(default = "default_dev_backend_host")]
    pub dev_backend_host: String,
    #[serde(default = "default_dev_backend_port")]
    pub dev_backend_port: u16,
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_copy_indicator_ms")]
    pub copy_indicator_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_api_timeout() -> u64 {
    10
}

fn default_resolver_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_dev_backend_host() -> String {
    "localhost".to_string()
}

fn default_dev_backend_port() -> u16 {
    3000
}

fn default_copy_indicator_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            origin: default_resolver_origin(),
            dev_backend_host: default_dev_backend_host(),
            dev_backend_port: default_dev_backend_port(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_indicator_ms: default_copy_indicator_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
