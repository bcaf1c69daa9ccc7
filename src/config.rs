use crate::clients::RetryPolicy;
use crate::error::{AppError, AppResult};
use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 优化服务地址
    pub endpoint: String,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 5xx 时的最大重试次数（0 表示不重试）
    pub max_retries: usize,
    /// 重试间隔（毫秒）
    pub retry_backoff_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/optimize".to_string(),
            timeout_secs: 30,
            max_retries: 0,
            retry_backoff_ms: 500,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            endpoint: std::env::var("OPTIMIZE_ENDPOINT").unwrap_or(default.endpoint),
            timeout_secs: std::env::var("OPTIMIZE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.timeout_secs),
            max_retries: std::env::var("OPTIMIZE_MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_retries),
            retry_backoff_ms: std::env::var("OPTIMIZE_RETRY_BACKOFF_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.retry_backoff_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 字符串解析配置，缺省字段使用默认值
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从 TOML 文件加载配置
    pub async fn from_toml_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;

        Ok(config)
    }

    /// 解析优化服务地址
    pub fn endpoint_url(&self) -> AppResult<Url> {
        Url::parse(&self.endpoint).map_err(|source| AppError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}
