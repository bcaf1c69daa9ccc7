//! 请求构建服务 - 业务能力层
//!
//! 纯函数：把已校验的请求映射为请求体，没有失败分支

use crate::models::{OptimizationRequest, WirePayload};

/// 构建请求体
pub fn build(request: &OptimizationRequest) -> WirePayload {
    WirePayload {
        firm: request.firm().to_string(),
        locations: request.locations().to_vec(),
        num_vehicles: request.vehicle_count().get(),
        max_duration: request.max_duration().clone(),
    }
}
