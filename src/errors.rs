use std::fmt;

use actix_web::http::StatusCode;

/// Crate-wide error type.
///
/// Upstream variants carry the final `detail` text for the proxy's error
/// body; the failing upstream status code is captured at construction time
/// and never re-derived by callers.
#[derive(Debug, Clone)]
pub enum GeovisionError {
    Config(String),
    UpstreamTimeout(String),
    UpstreamConnection(String),
    UpstreamStatus { code: u16, message: String },
    UpstreamNotFound(String),
    NoData(String),
    Serialization(String),
    Internal(String),
}

impl GeovisionError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GeovisionError::Config(_) => "E001",
            GeovisionError::UpstreamTimeout(_) => "E002",
            GeovisionError::UpstreamConnection(_) => "E003",
            GeovisionError::UpstreamStatus { .. } => "E004",
            GeovisionError::UpstreamNotFound(_) => "E005",
            GeovisionError::NoData(_) => "E006",
            GeovisionError::Serialization(_) => "E007",
            GeovisionError::Internal(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GeovisionError::Config(_) => "Configuration Error",
            GeovisionError::UpstreamTimeout(_) => "Upstream Timeout",
            GeovisionError::UpstreamConnection(_) => "Upstream Connection Error",
            GeovisionError::UpstreamStatus { .. } => "Upstream HTTP Error",
            GeovisionError::UpstreamNotFound(_) => "IP Not Found Upstream",
            GeovisionError::NoData(_) => "No Geolocation Data",
            GeovisionError::Serialization(_) => "Serialization Error",
            GeovisionError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GeovisionError::Config(msg) => msg,
            GeovisionError::UpstreamTimeout(msg) => msg,
            GeovisionError::UpstreamConnection(msg) => msg,
            GeovisionError::UpstreamStatus { message, .. } => message,
            GeovisionError::UpstreamNotFound(msg) => msg,
            GeovisionError::NoData(msg) => msg,
            GeovisionError::Serialization(msg) => msg,
            GeovisionError::Internal(msg) => msg,
        }
    }

    /// HTTP status the proxy answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GeovisionError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GeovisionError::UpstreamConnection(_) => StatusCode::BAD_GATEWAY,
            GeovisionError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            GeovisionError::UpstreamNotFound(_) => StatusCode::NOT_FOUND,
            GeovisionError::NoData(_) => StatusCode::NOT_FOUND,
            GeovisionError::Config(_)
            | GeovisionError::Serialization(_)
            | GeovisionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于交互模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GeovisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GeovisionError {}

// 便捷的构造函数
impl GeovisionError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        GeovisionError::Config(msg.into())
    }

    pub fn upstream_timeout<T: Into<String>>(msg: T) -> Self {
        GeovisionError::UpstreamTimeout(msg.into())
    }

    pub fn upstream_connection<T: Into<String>>(msg: T) -> Self {
        GeovisionError::UpstreamConnection(msg.into())
    }

    pub fn upstream_status<T: Into<String>>(code: u16, msg: T) -> Self {
        GeovisionError::UpstreamStatus {
            code,
            message: msg.into(),
        }
    }

    /// 404 from the upstream database for this address.
    pub fn upstream_not_found(ip: &str) -> Self {
        GeovisionError::UpstreamNotFound(format!("IP not found in upstream database: {}", ip))
    }

    /// Empty/shapeless upstream payload or a record without coordinates.
    pub fn no_data(ip: &str) -> Self {
        GeovisionError::NoData(format!("no geolocation data found for IP: {}", ip))
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GeovisionError::Serialization(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        GeovisionError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for GeovisionError {
    fn from(err: serde_json::Error) -> Self {
        GeovisionError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for GeovisionError {
    fn from(err: std::io::Error) -> Self {
        GeovisionError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeovisionError>;
