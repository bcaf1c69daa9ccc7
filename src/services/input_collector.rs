//! 输入收集服务 - 业务能力层
//!
//! 只负责"读字段 + 校验"能力，不发任何请求

use std::num::NonZeroU32;
use tracing::debug;

use crate::error::ValidationError;
use crate::infrastructure::FieldReader;
use crate::models::{MaxDuration, OptimizationRequest};

/// 公司名称字段
pub const FIELD_FIRM: &str = "firm";
/// 地点列表字段（以 "/" 分隔）
pub const FIELD_LOCATIONS: &str = "locations";
/// 车辆数量字段
pub const FIELD_NUM_VEHICLES: &str = "num_vehicles";
/// 最长时长字段
pub const FIELD_MAX_DURATION: &str = "max_duration";

/// 地点分隔符
pub const LOCATION_DELIMITER: char = '/';

/// 输入收集服务
///
/// 职责：
/// - 从宿主读取四个字段
/// - 校验并转换为 [`OptimizationRequest`]
/// - 校验失败时不产生任何请求对象
pub struct InputCollector;

impl InputCollector {
    pub fn new() -> Self {
        Self
    }

    /// 收集并校验输入
    ///
    /// 按 firm → locations → num_vehicles → max_duration 的顺序检查，返回第一个错误。
    pub fn collect(&self, reader: &dyn FieldReader) -> Result<OptimizationRequest, ValidationError> {
        let firm = reader.read(FIELD_FIRM).unwrap_or_default();
        if firm.trim().is_empty() {
            return Err(ValidationError::new(FIELD_FIRM, "empty"));
        }

        let locations = split_locations(reader.read(FIELD_LOCATIONS).as_deref().unwrap_or(""))?;

        let vehicle_count = parse_vehicle_count(reader.read(FIELD_NUM_VEHICLES).as_deref())?;

        let max_duration = reader
            .read(FIELD_MAX_DURATION)
            .map(MaxDuration::Text)
            .ok_or_else(|| ValidationError::new(FIELD_MAX_DURATION, "missing"))?;

        debug!(
            "输入校验通过: firm={}, 地点数={}, 车辆数={}, max_duration={}",
            firm.trim(),
            locations.len(),
            vehicle_count,
            max_duration
        );

        OptimizationRequest::new(firm, locations, vehicle_count, max_duration)
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// 拆分地点字符串
///
/// 每段去除首尾空白；原始值为空时报 `empty`，任一段为空时报 `empty-segment`。
pub fn split_locations(raw: &str) -> Result<Vec<String>, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::new(FIELD_LOCATIONS, "empty"));
    }

    raw.split(LOCATION_DELIMITER)
        .map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                Err(ValidationError::new(FIELD_LOCATIONS, "empty-segment"))
            } else {
                Ok(segment.to_string())
            }
        })
        .collect()
}

/// 解析车辆数量，必须是完整的十进制正整数
pub fn parse_vehicle_count(raw: Option<&str>) -> Result<NonZeroU32, ValidationError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<NonZeroU32>().ok())
        .ok_or_else(|| ValidationError::new(FIELD_NUM_VEHICLES, "invalid"))
}
