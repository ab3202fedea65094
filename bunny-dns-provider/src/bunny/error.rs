//! bunny.net 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::BunnyProvider;

/// bunny.net 按 HTTP 状态码区分错误，`raw.code` 为状态码
/// 参考: <https://docs.bunny.net/reference/bunnynet-api-overview>
impl ProviderErrorMapper for BunnyProvider {
    fn provider_name(&self) -> &'static str {
        "bunny"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 认证错误
            Some("401" | "403") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            // 删除时记录不存在
            Some("404") if context.record_id.is_some() => ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: context.record_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            // Zone 不存在
            Some("404") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            // 其他错误 fallback
            _ => self.unknown_error(raw),
        }
    }
}
