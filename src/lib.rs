//! # Delivery Optimize Submit
//!
//! 把界面上填写的配送参数提交给远端路线优化服务，并把返回结果变成可显示的行
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 宿主提供的能力，只暴露接口
//! - `FieldReader` - 按名字读取字段
//! - `DisplayWriter` - 整体替换显示区域
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - 纯逻辑，不做网络请求
//! - `InputCollector` - 收集并校验输入
//! - `build` - 构建请求体
//! - `render` - 把结果变成显示行
//! - `clients/OptimizationClient` - 网络交互（超时、错误分类、单飞保护、可选重试）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整流程
//! - `SubmissionFlow` - 收集 → 构建 → 发送 → 渲染，所有错误在此变成显示行
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{OptimizationClient, RetryPolicy};
pub use config::Config;
pub use error::{AppError, AppResult, FailureKind, ValidationError};
pub use infrastructure::{DisplayWriter, FieldReader, HtmlDisplay, MapFieldReader, MemoryDisplay};
pub use models::{MaxDuration, OptimizationRequest, OptimizationResult, RoutePlan, WirePayload};
pub use services::InputCollector;
pub use workflow::{SubmissionFlow, SubmitOutcome};
