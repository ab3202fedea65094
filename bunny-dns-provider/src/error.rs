//! Provider 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// 调用 DNS 服务商 API 时的错误
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 请求没有得到响应（连接失败、超时、读取响应体失败）
    #[error("[{provider}] network error: {detail}")]
    NetworkError { provider: String, detail: String },

    #[error("[{provider}] invalid credentials: {}", .raw_message.as_deref().unwrap_or("access denied"))]
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// Zone 不存在
    #[error("[{provider}] zone {domain} not found: {}", .raw_message.as_deref().unwrap_or("-"))]
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] record {record_id} not found: {}", .raw_message.as_deref().unwrap_or("-"))]
    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] failed to parse response: {detail}")]
    ParseError { provider: String, detail: String },

    #[error("[{provider}] failed to serialize request: {detail}")]
    SerializationError { provider: String, detail: String },

    /// 未归类的 API 错误，`raw_code` 为 HTTP 状态码
    #[error("[{provider}] API error ({}): {raw_message}", .raw_code.as_deref().unwrap_or("unknown"))]
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

/// 从 secret 数据中提取凭证时的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("key {0:?} not found in secret data")]
    MissingField(String),

    #[error("invalid value for key {field:?}: {detail}")]
    InvalidValue { field: String, detail: String },
}
