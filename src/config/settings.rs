use serde::Deserialize;

pub const DEFAULT_CACHE_URL: &str = "redis://localhost:6379/0";

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Key-value cache
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// e.g. redis://host:6379/0, rediss://..., redis+unix:///path
    #[serde(default = "default_cache_url")]
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { url: default_cache_url() }
    }
}

/// ================================
/// HTTP client used by get_new
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct HttpConfig {
    /// whole-request timeout; unset keeps the client default (none)
    pub timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_cache_url() -> String {
    DEFAULT_CACHE_URL.to_string()
}
