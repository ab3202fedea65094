//! 求解器配置
//!
//! 来自 Issuer 中 webhook solver 的 `config` 字段，例如：
//!
//! ```yaml
//! webhook:
//!   groupName: acme.example.com
//!   solverName: bunny
//!   config:
//!     secretRef: bunny-credentials
//!     secretNamespace: cert-manager
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// 存放凭证的 secret 名称
    #[serde(default)]
    pub secret_ref: String,
    /// secret 所在命名空间，缺省时使用请求的命名空间
    #[serde(default)]
    pub secret_namespace: Option<String>,
}

impl ProviderConfig {
    /// 解析原始配置；没有配置时返回默认值
    pub fn from_raw(raw: Option<&Value>) -> CoreResult<Self> {
        match raw {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value) => Self::deserialize(value)
                .map_err(|e| CoreError::ConfigError(format!("error decoding solver config: {e}"))),
        }
    }

    /// secret 所在命名空间
    pub fn namespace_or<'a>(&'a self, resource_namespace: &'a str) -> &'a str {
        match self.secret_namespace.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => resource_namespace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_config_is_default() {
        assert_eq!(ProviderConfig::from_raw(None).unwrap(), ProviderConfig::default());
        assert_eq!(
            ProviderConfig::from_raw(Some(&Value::Null)).unwrap(),
            ProviderConfig::default()
        );
    }

    #[test]
    fn test_parse_config() {
        let raw = json!({ "secretRef": "bunny", "secretNamespace": "certs" });
        let config = ProviderConfig::from_raw(Some(&raw)).unwrap();

        assert_eq!(config.secret_ref, "bunny");
        assert_eq!(config.namespace_or("default"), "certs");
    }

    #[test]
    fn test_empty_namespace_falls_back() {
        let raw = json!({ "secretRef": "bunny", "secretNamespace": "" });
        let config = ProviderConfig::from_raw(Some(&raw)).unwrap();

        assert_eq!(config.namespace_or("default"), "default");
    }

    #[test]
    fn test_malformed_config() {
        let raw = json!({ "secretRef": 42 });
        let err = ProviderConfig::from_raw(Some(&raw)).unwrap_err();

        assert!(matches!(err, CoreError::ConfigError(_)));
    }
}
