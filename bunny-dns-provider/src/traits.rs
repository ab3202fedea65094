//! Provider 抽象 Trait 与错误映射工具

use std::fmt::Display;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::TxtRecord;

/// DNS 记录操作接口
///
/// 求解器只依赖这个 trait，测试时可以替换成假实现。
#[async_trait]
pub trait DnsRecordClient: Send + Sync {
    /// 在 zone 中创建 TXT 记录，返回服务商确认的记录 ID
    async fn create_txt_record(&self, zone_id: i64, record: &TxtRecord) -> Result<i64>;

    /// 删除记录
    ///
    /// 记录不存在时返回 `ProviderError::RecordNotFound`
    async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()>;

    /// 按名称和值查找 TXT 记录，返回匹配的记录 ID
    async fn find_txt_records(&self, zone_id: i64, name: &str, value: &str) -> Result<Vec<i64>>;
}

/// 服务商返回的原始错误
#[derive(Debug, Clone)]
pub struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误发生时的请求上下文，用于填充错误信息
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub record_id: Option<String>,
    pub domain: Option<String>,
}

/// 服务商错误码到 `ProviderError` 的映射
pub trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }

    fn network_error(&self, detail: impl Display) -> ProviderError {
        ProviderError::NetworkError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn parse_error(&self, detail: impl Display) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn serialization_error(&self, detail: impl Display) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}
