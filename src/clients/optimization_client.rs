/// 路线优化服务客户端
///
/// 封装与优化服务的网络交互：发送、超时、错误分类、单飞保护
use crate::config::Config;
use crate::error::{AppResult, FailureKind};
use crate::models::{OptimizationResult, WirePayload};
use crate::utils::logging::log_submission_start;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// 重试策略
///
/// 默认不重试。只有 5xx 才会被重试，其它失败立即返回。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::from_millis(500),
        }
    }
}

/// 优化服务客户端
///
/// 克隆出的客户端共享同一个“在途”槽位：任意时刻只允许一个请求未结束，
/// 其间的新请求直接返回 [`FailureKind::Busy`]，不会发出网络请求。
#[derive(Debug, Clone)]
pub struct OptimizationClient {
    http: Client,
    timeout: Duration,
    retry: RetryPolicy,
    in_flight: Arc<Semaphore>,
}

impl OptimizationClient {
    /// 根据配置创建客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self::with_timeout(config.timeout())?.with_retry(config.retry_policy()))
    }

    /// 使用指定超时创建客户端（不重试）
    pub fn with_timeout(timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            timeout,
            retry: RetryPolicy::default(),
            in_flight: Arc::new(Semaphore::new(1)),
        })
    }

    /// 设置重试策略
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 当前是否有未结束的请求
    pub fn is_busy(&self) -> bool {
        self.in_flight.available_permits() == 0
    }

    /// 发送优化请求
    ///
    /// # 参数
    /// - `payload`: 请求体
    /// - `endpoint`: 优化服务地址
    ///
    /// # 返回
    /// 成功时返回解码后的正文，失败时返回对应的 [`FailureKind`]；不会 panic，也不返回 `Err`
    pub async fn send(&self, payload: &WirePayload, endpoint: &Url) -> OptimizationResult {
        let _permit = match self.in_flight.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("⚠️ 已有优化请求在进行中，本次请求被拒绝");
                return OptimizationResult::Failure(FailureKind::Busy);
            }
        };

        log_submission_start(
            &payload.firm,
            payload.locations.len(),
            payload.num_vehicles,
            endpoint.as_str(),
        );
        debug!(
            "优化请求 Payload: {}",
            serde_json::to_string(payload).unwrap_or_default()
        );

        // 整个调用（含重试与等待）共用一个截止时间，超时后丢弃底层请求
        let outcome = tokio::time::timeout(self.timeout, self.send_with_retry(payload, endpoint))
            .await
            .unwrap_or_else(|_| Err(FailureKind::timeout()));

        match outcome {
            Ok(body) => {
                info!("✓ 优化服务响应成功 ({} 字节)", body.len());
                OptimizationResult::Success(body)
            }
            Err(kind) => {
                error!("❌ 优化请求失败: {}", kind);
                OptimizationResult::Failure(kind)
            }
        }
    }

    async fn send_with_retry(&self, payload: &WirePayload, endpoint: &Url) -> Result<String, FailureKind> {
        let mut retries = 0;
        loop {
            info!("📤 正在发送优化请求: {}", endpoint);

            match self.exchange(payload, endpoint).await {
                Err(kind) if kind.is_transient() && retries < self.retry.max_retries => {
                    retries += 1;
                    warn!(
                        "优化服务暂时异常: {} (重试 {}/{}), 等待 {:?} 后重试...",
                        kind, retries, self.retry.max_retries, self.retry.backoff
                    );
                    sleep(self.retry.backoff).await;
                }
                result => return result,
            }
        }
    }

    async fn exchange(&self, payload: &WirePayload, endpoint: &Url) -> Result<String, FailureKind> {
        let response = self
            .http
            .post(endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureKind::Http {
                status: status.as_u16(),
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);

        let bytes = response.bytes().await.map_err(classify_transport_error)?;

        decode_body(&bytes, is_json)
    }
}

fn classify_transport_error(err: reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        FailureKind::timeout()
    } else {
        FailureKind::network(err.to_string())
    }
}

/// 解码响应正文
///
/// JSON 响应必须是一个 JSON 字符串；其它类型按 UTF-8 文本处理。
fn decode_body(bytes: &[u8], is_json: bool) -> Result<String, FailureKind> {
    if is_json {
        serde_json::from_slice::<String>(bytes)
            .map_err(|e| FailureKind::parse(format!("响应不是 JSON 字符串: {}", e)))
    } else {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| FailureKind::parse(format!("响应不是有效的 UTF-8 文本: {}", e)))
    }
}
