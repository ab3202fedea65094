//! 凭证解析服务
//!
//! 请求配置 -> secret 命名空间/名称 -> 读取 secret -> 提取 `api-key` 与 `zone-id`。
//! 结果不缓存，每次调用都重新读取。

use std::sync::Arc;

use bunny_dns_provider::{CredentialError, ProviderCredentials};

use crate::error::{CoreError, CoreResult};
use crate::traits::SecretStore;
use crate::types::{ChallengeRequest, ProviderConfig};

/// 凭证解析服务
pub struct CredentialService {
    secret_store: Arc<dyn SecretStore>,
}

impl CredentialService {
    #[must_use]
    pub fn new(secret_store: Arc<dyn SecretStore>) -> Self {
        Self { secret_store }
    }

    /// 解析请求对应的 bunny.net 凭证
    pub async fn resolve(&self, request: &ChallengeRequest) -> CoreResult<ProviderCredentials> {
        let config = ProviderConfig::from_raw(request.config.as_ref())?;
        let namespace = config.namespace_or(&request.resource_namespace);
        let name = config.secret_ref.as_str();

        log::debug!("Loading credentials from secret {namespace}/{name}");

        let data = self
            .secret_store
            .get_secret(namespace, name)
            .await
            .map_err(|source| CoreError::SecretLookup {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            })?;

        ProviderCredentials::from_map(&data).map_err(|e| match e {
            CredentialError::MissingField(field) => CoreError::MissingSecretField {
                field,
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            CredentialError::InvalidValue { field, detail } => CoreError::InvalidSecretField {
                field,
                namespace: namespace.to_string(),
                name: name.to_string(),
                detail,
            },
        })
    }
}
