use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// 最长时长约束
///
/// 单位由远端服务决定，本层只原样透传。序列化时不带标签，
/// 即 JSON 字符串或 JSON 数字。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxDuration {
    Number(serde_json::Number),
    Text(String),
}

impl From<&str> for MaxDuration {
    fn from(value: &str) -> Self {
        MaxDuration::Text(value.to_string())
    }
}

impl From<String> for MaxDuration {
    fn from(value: String) -> Self {
        MaxDuration::Text(value)
    }
}

impl From<u64> for MaxDuration {
    fn from(value: u64) -> Self {
        MaxDuration::Number(value.into())
    }
}

impl fmt::Display for MaxDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDuration::Number(n) => write!(f, "{}", n),
            MaxDuration::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 路线优化请求
///
/// 字段私有，只能通过 [`OptimizationRequest::new`] 构造，
/// 因此拿到的实例一定是完整且合法的。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationRequest {
    firm: String,
    locations: Vec<String>,
    vehicle_count: NonZeroU32,
    max_duration: MaxDuration,
}

impl OptimizationRequest {
    /// 创建请求并校验不变量
    ///
    /// # 参数
    /// - `firm`: 公司名称（去除首尾空白后不能为空）
    /// - `locations`: 有序地点列表（至少一个，且每项非空）
    /// - `vehicle_count`: 车辆数量
    /// - `max_duration`: 最长时长，原样透传
    pub fn new(
        firm: impl Into<String>,
        locations: Vec<String>,
        vehicle_count: NonZeroU32,
        max_duration: MaxDuration,
    ) -> Result<Self, ValidationError> {
        let firm = firm.into().trim().to_string();
        if firm.is_empty() {
            return Err(ValidationError::new("firm", "empty"));
        }

        if locations.is_empty() {
            return Err(ValidationError::new("locations", "empty"));
        }
        if locations.iter().any(|l| l.trim().is_empty()) {
            return Err(ValidationError::new("locations", "empty-segment"));
        }

        Ok(Self {
            firm,
            locations,
            vehicle_count,
            max_duration,
        })
    }

    pub fn firm(&self) -> &str {
        &self.firm
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn vehicle_count(&self) -> NonZeroU32 {
        self.vehicle_count
    }

    pub fn max_duration(&self) -> &MaxDuration {
        &self.max_duration
    }
}
