use crate::error::FailureKind;

/// 一次优化调用的结果
///
/// 失败也是数据，由渲染层转成提示文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizationResult {
    /// 解码后的响应正文（按换行拆分后逐行显示）
    Success(String),
    /// 调用失败
    Failure(FailureKind),
}

impl OptimizationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OptimizationResult::Success(_))
    }

    pub fn failure(&self) -> Option<&FailureKind> {
        match self {
            OptimizationResult::Failure(kind) => Some(kind),
            OptimizationResult::Success(_) => None,
        }
    }
}

impl From<FailureKind> for OptimizationResult {
    fn from(kind: FailureKind) -> Self {
        OptimizationResult::Failure(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_accessor() {
        let ok = OptimizationResult::Success("A".to_string());
        assert!(ok.is_success());
        assert_eq!(ok.failure(), None);

        let busy: OptimizationResult = FailureKind::Busy.into();
        assert!(!busy.is_success());
        assert_eq!(busy.failure(), Some(&FailureKind::Busy));
    }
}
