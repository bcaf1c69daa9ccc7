//! 结果渲染服务 - 业务能力层
//!
//! 把结果变成有序的显示行，不直接操作界面

use crate::error::ValidationError;
use crate::models::OptimizationResult;

/// 渲染优化结果
///
/// - 成功：按 `'\n'` 拆分正文，空行也保留（包括末尾的空行）
/// - 失败：单行提示文本
pub fn render(result: &OptimizationResult) -> Vec<String> {
    match result {
        OptimizationResult::Success(body) => body.split('\n').map(str::to_string).collect(),
        OptimizationResult::Failure(kind) => vec![format!("❌ {}", kind)],
    }
}

/// 渲染输入校验错误
pub fn render_validation(err: &ValidationError) -> Vec<String> {
    vec![err.message()]
}
