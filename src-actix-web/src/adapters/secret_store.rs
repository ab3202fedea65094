//! Kubernetes secret 存储适配器
//!
//! 使用 kube-rs 读取 `core/v1` Secret

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};

use bunny_solver_core::{SecretData, SecretStore, SecretStoreError};

/// 基于 kube-rs 的 secret 存储
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    /// 使用集群内 ServiceAccount 或本地 kubeconfig 创建客户端
    pub async fn connect() -> Result<Self, kube::Error> {
        let client = Client::try_default().await?;
        Ok(Self::new(client))
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<SecretData, SecretStoreError> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);

        let secret = api.get(name).await.map_err(map_kube_error)?;

        Ok(secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.0))
            .collect())
    }
}

fn map_kube_error(err: kube::Error) -> SecretStoreError {
    match err {
        kube::Error::Api(resp) if resp.code == 404 => SecretStoreError::NotFound,
        kube::Error::Api(resp) if resp.code == 403 => SecretStoreError::Forbidden(resp.message),
        other => SecretStoreError::Backend(other.to_string()),
    }
}
