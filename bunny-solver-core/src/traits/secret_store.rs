//! 凭证存储抽象 Trait

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::SecretStoreError;

/// secret 的 data 字段：字段名 -> 原始字节
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// 集群 secret 读取接口
///
/// 平台实现:
/// - Webhook: `KubeSecretStore` (kube-rs)
/// - 测试: 内存实现
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// 按命名空间和名称读取 secret
    ///
    /// # Arguments
    /// * `namespace` - 命名空间
    /// * `name` - secret 名称
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<SecretData, SecretStoreError>;
}
