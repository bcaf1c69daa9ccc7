//! 日志工具模块
//!
//! 提供提交流程中日志格式化和输出的辅助函数

use tracing::info;

/// 记录一次提交开始
///
/// # 参数
/// - `firm`: 公司名称
/// - `location_count`: 地点数量
/// - `vehicle_count`: 车辆数量
/// - `endpoint`: 优化服务地址
pub fn log_submission_start(firm: &str, location_count: usize, vehicle_count: u32, endpoint: &str) {
    info!("{}", "=".repeat(60));
    info!("🚚 提交路线优化请求 - {}", truncate_text(firm, 40));
    info!("📍 地点数: {} | 车辆数: {}", location_count, vehicle_count);
    info!("🌐 服务地址: {}", endpoint);
    info!("{}", "=".repeat(60));
}

/// 记录一次提交结束
///
/// # 参数
/// - `outcome`: 结果摘要
/// - `line_count`: 写入显示区域的行数
pub fn log_submission_complete(outcome: &str, line_count: usize) {
    info!("{}", "─".repeat(60));
    info!("✓ 提交结束: {} (显示 {} 行)", outcome, line_count);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
