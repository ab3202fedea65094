//! 核心错误类型

use bunny_dns_provider::ProviderError;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// 读取 secret 失败的原因
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("secret not found")]
    NotFound,

    #[error("access denied: {0}")]
    Forbidden(String),

    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// 求解器配置无法解析
    #[error("{0}")]
    ConfigError(String),

    #[error("unable to get secret '{namespace}/{name}': {source}")]
    SecretLookup {
        namespace: String,
        name: String,
        source: SecretStoreError,
    },

    #[error("unable to get '{field}' from secret '{namespace}/{name}': key \"{field}\" not found in secret data")]
    MissingSecretField {
        field: String,
        namespace: String,
        name: String,
    },

    #[error("unable to get '{field}' from secret '{namespace}/{name}': {detail}")]
    InvalidSecretField {
        field: String,
        namespace: String,
        name: String,
        detail: String,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("solver has not been initialized")]
    NotInitialized,

    #[error("solver has already been initialized")]
    AlreadyInitialized,
}
