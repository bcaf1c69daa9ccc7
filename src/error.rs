use thiserror::Error;

/// 输入校验错误
///
/// 在任何网络请求之前产生，`field` 为出错的字段名，`reason` 为简短原因代码
/// （如 `empty`、`empty-segment`、`invalid`、`missing`）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("输入无效 ({field}): {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    /// 面向用户的提示文本
    pub fn message(&self) -> String {
        let hint = match (self.field, self.reason) {
            ("firm", _) => "请填写公司名称",
            ("locations", "empty-segment") => "地点列表中存在空项，请检查 \"/\" 分隔符",
            ("locations", _) => "请至少填写一个地点",
            ("num_vehicles", _) => "车辆数量必须是正整数",
            ("max_duration", _) => "请填写最长时长",
            _ => "输入无效",
        };
        format!("⚠️ {} ({}: {})", hint, self.field, self.reason)
    }
}

/// 调用优化服务失败的类型
///
/// `Display` 即渲染给用户的单行说明。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// 未拿到响应（DNS、连接被拒、超时）
    #[error("无法连接到优化服务: {cause}")]
    Network { cause: String },

    /// 拿到了响应，但状态码不是 2xx
    #[error("优化服务返回错误状态 {status}{}", status_hint(.status))]
    Http { status: u16 },

    /// 拿到了响应，但响应体无法使用
    #[error("无法解析优化服务的响应: {cause}")]
    Parse { cause: String },

    /// 已有请求正在进行
    #[error("已有优化请求正在进行，请稍候")]
    Busy,
}

impl FailureKind {
    pub fn network(cause: impl Into<String>) -> Self {
        FailureKind::Network {
            cause: cause.into(),
        }
    }

    pub fn parse(cause: impl Into<String>) -> Self {
        FailureKind::Parse {
            cause: cause.into(),
        }
    }

    pub fn timeout() -> Self {
        Self::network("timeout")
    }

    /// 是否为临时性错误（仅 5xx）
    ///
    /// 调用方可据此决定是否向用户提供“重试”操作。
    pub fn is_transient(&self) -> bool {
        matches!(self, FailureKind::Http { status } if (500..600).contains(status))
    }
}

fn status_hint(status: &u16) -> &'static str {
    match *status {
        500..=599 => "（服务端暂时异常，可稍后重试）",
        400..=499 => "（请求被拒绝，请检查输入）",
        _ => "",
    }
}

/// 初始化与配置阶段的错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 优化服务地址无效
    #[error("优化服务地址无效 ({endpoint}): {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// 创建 HTTP 客户端失败
    #[error("创建 HTTP 客户端失败: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// 配置文件解析失败
    #[error("配置解析失败: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
