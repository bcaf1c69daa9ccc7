//! 提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整流程，并在最外层把所有错误变成显示行
//!
//! 流程顺序：
//! 1. 收集并校验输入（同步，失败则不发请求）
//! 2. 构建请求体（同步）
//! 3. 发送请求（唯一的挂起点）
//! 4. 渲染结果并写入显示区域

use reqwest::Url;
use tracing::{info, warn};

use crate::clients::OptimizationClient;
use crate::config::Config;
use crate::error::{AppResult, FailureKind, ValidationError};
use crate::infrastructure::{DisplayWriter, FieldReader};
use crate::models::{OptimizationResult, RoutePlan};
use crate::services::{build, render, render_validation, InputCollector};
use crate::utils::logging::log_submission_complete;

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 成功并已写入显示区域
    Rendered {
        lines: Vec<String>,
        plan: Option<RoutePlan>,
    },
    /// 调用失败，提示已写入显示区域
    Failed {
        kind: FailureKind,
        lines: Vec<String>,
    },
    /// 输入无效，未发出请求
    Rejected(ValidationError),
    /// 已有请求在进行，显示区域未被改动
    Busy,
}

impl SubmitOutcome {
    /// 是否值得向用户提供“重试”操作（仅 5xx）
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitOutcome::Failed { kind, .. } if kind.is_transient())
    }

    fn summary(&self) -> String {
        match self {
            SubmitOutcome::Rendered { plan: Some(plan), .. } => {
                format!("成功，{} 辆车的路线", plan.vehicle_count())
            }
            SubmitOutcome::Rendered { plan: None, .. } => "成功".to_string(),
            SubmitOutcome::Failed { kind, .. } => format!("失败 - {}", kind),
            SubmitOutcome::Rejected(err) => format!("输入无效 - {}", err),
            SubmitOutcome::Busy => "已有请求在进行".to_string(),
        }
    }
}

/// 提交流程
///
/// - 编排 收集 → 构建 → 发送 → 渲染
/// - 不持有界面，只依赖字段读取和显示写入两种能力
/// - 任何错误都以显示行的形式交给宿主，不会向上抛出
pub struct SubmissionFlow {
    collector: InputCollector,
    client: OptimizationClient,
    endpoint: Url,
}

impl SubmissionFlow {
    /// 根据配置创建提交流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self::with_client(
            OptimizationClient::new(config)?,
            config.endpoint_url()?,
        ))
    }

    /// 使用已有客户端创建（克隆的客户端共享在途槽位）
    pub fn with_client(client: OptimizationClient, endpoint: Url) -> Self {
        Self {
            collector: InputCollector::new(),
            client,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn run(&self, reader: &dyn FieldReader, display: &dyn DisplayWriter) -> SubmitOutcome {
        let outcome = self.execute(reader, display).await;

        let written = match &outcome {
            SubmitOutcome::Rendered { lines, .. } | SubmitOutcome::Failed { lines, .. } => lines.len(),
            SubmitOutcome::Rejected(_) => 1,
            SubmitOutcome::Busy => 0,
        };
        log_submission_complete(&outcome.summary(), written);

        outcome
    }

    async fn execute(&self, reader: &dyn FieldReader, display: &dyn DisplayWriter) -> SubmitOutcome {
        // ========== 1. 收集输入 ==========
        let request = match self.collector.collect(reader) {
            Ok(request) => request,
            Err(err) => {
                warn!("⚠️ 输入校验失败，不发送请求: {}", err);
                display.write_lines(&render_validation(&err));
                return SubmitOutcome::Rejected(err);
            }
        };

        // ========== 2. 构建请求体 ==========
        let payload = build(&request);

        // ========== 3. 发送 ==========
        let result = self.client.send(&payload, &self.endpoint).await;

        // 显示区域归在途请求所有
        if result.failure() == Some(&FailureKind::Busy) {
            info!("已有请求在进行，保留显示区域不变");
            return SubmitOutcome::Busy;
        }

        // ========== 4. 渲染 ==========
        let lines = render(&result);
        display.write_lines(&lines);

        match result {
            OptimizationResult::Success(_) => {
                let plan = RoutePlan::from_lines(&lines);
                SubmitOutcome::Rendered { lines, plan }
            }
            OptimizationResult::Failure(kind) => SubmitOutcome::Failed { kind, lines },
        }
    }
}
