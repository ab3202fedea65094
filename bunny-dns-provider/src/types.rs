//! 凭证与记录类型

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CredentialError;

/// secret 中存放 API Key 的字段名
pub const API_KEY_FIELD: &str = "api-key";
/// secret 中存放 Zone ID 的字段名
pub const ZONE_ID_FIELD: &str = "zone-id";

/// bunny.net API 凭证
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub api_key: String,
    pub zone_id: i64,
}

impl ProviderCredentials {
    /// 从 secret 的 data 字段中提取凭证
    ///
    /// 两个字段都必须存在，`zone-id` 必须是整数。首尾空白会被去掉
    /// （`echo` 写入的 secret 常带换行）。
    pub fn from_map(data: &BTreeMap<String, Vec<u8>>) -> Result<Self, CredentialError> {
        let api_key = string_field(data, API_KEY_FIELD)?;
        let zone_id = string_field(data, ZONE_ID_FIELD)?;
        let zone_id = zone_id
            .parse::<i64>()
            .map_err(|e| CredentialError::InvalidValue {
                field: ZONE_ID_FIELD.to_string(),
                detail: format!("{zone_id:?} is not an integer: {e}"),
            })?;

        Ok(Self { api_key, zone_id })
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &"<redacted>")
            .field("zone_id", &self.zone_id)
            .finish()
    }
}

fn string_field(data: &BTreeMap<String, Vec<u8>>, key: &str) -> Result<String, CredentialError> {
    let bytes = data
        .get(key)
        .ok_or_else(|| CredentialError::MissingField(key.to_string()))?;

    let value = std::str::from_utf8(bytes).map_err(|e| CredentialError::InvalidValue {
        field: key.to_string(),
        detail: format!("not valid UTF-8: {e}"),
    })?;

    Ok(value.trim().to_string())
}

/// 待创建的 TXT 记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    /// 客户端生成的记录 ID，服务商可能返回另一个
    pub id: i64,
    pub name: String,
    pub value: String,
}

impl TxtRecord {
    pub fn new(id: i64, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
        }
    }
}
