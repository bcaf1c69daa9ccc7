use crate::models::request::MaxDuration;
use serde::{Deserialize, Serialize};

/// 发送给优化服务的请求体
///
/// 字段名固定：`firm` / `locations` / `num_vehicles` / `max_duration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePayload {
    pub firm: String,
    pub locations: Vec<String>,
    pub num_vehicles: u32,
    pub max_duration: MaxDuration,
}
