//! 优化结果的结构化视图
//!
//! 优化服务按车辆输出两行文本：
//!
//! ```text
//! Optimal Route for Vehicle 1: Megrine -> Marsa -> Megrine
//! Total Road Time for Vehicle 1: 0h 12m 3s seconds
//! ```
//!
//! 距离版本的服务会输出 `Total Road Distance ...`。无解时只有一行 `No solution found.`。
//! 这里的解析只用于给调用方提供结构化数据，不影响显示的行。

use regex::Regex;
use serde::Serialize;

/// 无解时服务返回的文本
pub const NO_SOLUTION: &str = "No solution found.";

/// 单辆车的路线
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRoute {
    /// 车辆编号（从 1 开始）
    pub vehicle: u32,
    /// 途经地点（含起止点）
    pub stops: Vec<String>,
    /// 总时长或总距离的原始文本
    pub total: Option<String>,
}

/// 全部车辆的路线
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoutePlan {
    pub vehicles: Vec<VehicleRoute>,
}

impl RoutePlan {
    /// 从显示行中解析路线
    ///
    /// # 返回
    /// 无解或没有任何可识别的路线行时返回 `None`
    pub fn from_lines(lines: &[String]) -> Option<Self> {
        if lines.iter().any(|l| l.trim() == NO_SOLUTION) {
            return None;
        }

        let route_re = Regex::new(r"^Optimal Route for Vehicle (\d+):\s*(.*?)\s*$").ok()?;
        let total_re = Regex::new(r"^Total Road (?:Time|Distance) for Vehicle (\d+):\s*(.*?)\s*$").ok()?;

        let mut plan = RoutePlan::default();

        for line in lines {
            if let Some(cap) = route_re.captures(line) {
                let Ok(vehicle) = cap[1].parse::<u32>() else {
                    continue;
                };
                let stops = cap[2]
                    .split("->")
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                plan.vehicles.push(VehicleRoute {
                    vehicle,
                    stops,
                    total: None,
                });
            } else if let Some(cap) = total_re.captures(line) {
                let Ok(vehicle) = cap[1].parse::<u32>() else {
                    continue;
                };
                if let Some(route) = plan.vehicles.iter_mut().rev().find(|r| r.vehicle == vehicle) {
                    route.total = Some(cap[2].to_string());
                }
            }
        }

        if plan.vehicles.is_empty() {
            None
        } else {
            Some(plan)
        }
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(body: &str) -> Vec<String> {
        body.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_parse_duration_output() {
        let body = "Optimal Route for Vehicle 1: Megrine -> marsa, tunis -> manouba -> Megrine \n\
                    Total Road Time for Vehicle 1: 0h 42m 10s seconds \n\n\
                    Optimal Route for Vehicle 2: Megrine -> sidi bousaid, tunis -> Megrine \n\
                    Total Road Time for Vehicle 2: 0h 20m 5s seconds \n\n";

        let plan = RoutePlan::from_lines(&lines(body)).unwrap();

        assert_eq!(plan.vehicle_count(), 2);
        assert_eq!(
            plan.vehicles[0].stops,
            vec!["Megrine", "marsa, tunis", "manouba", "Megrine"]
        );
        assert_eq!(plan.vehicles[0].total.as_deref(), Some("0h 42m 10s seconds"));
        assert_eq!(plan.vehicles[1].vehicle, 2);
        assert_eq!(plan.vehicles[1].stops.len(), 3);
    }

    #[test]
    fn test_parse_distance_output() {
        let body = "Optimal Route for Vehicle 1: Acme -> Paris -> Acme \n\
                    Total Road Distance for Vehicle 1: 12.30 kilometers \n\n";

        let plan = RoutePlan::from_lines(&lines(body)).unwrap();
        assert_eq!(plan.vehicles[0].total.as_deref(), Some("12.30 kilometers"));
    }

    #[test]
    fn test_no_solution_and_free_text() {
        assert_eq!(RoutePlan::from_lines(&lines(NO_SOLUTION)), None);
        assert_eq!(RoutePlan::from_lines(&lines("hello\nworld")), None);
        assert_eq!(RoutePlan::from_lines(&[]), None);
    }
}
