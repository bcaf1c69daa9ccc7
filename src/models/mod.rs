pub mod payload;
pub mod request;
pub mod result;
pub mod route_plan;

pub use payload::WirePayload;
pub use request::{MaxDuration, OptimizationRequest};
pub use result::OptimizationResult;
pub use route_plan::{RoutePlan, VehicleRoute, NO_SOLUTION};
