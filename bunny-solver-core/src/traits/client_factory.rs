//! DNS 记录客户端工厂

use std::sync::Arc;
use std::time::Duration;

use bunny_dns_provider::{BunnyProvider, DnsRecordClient, ProviderCredentials, BUNNY_API_BASE};
use reqwest::Client;

use crate::error::{CoreError, CoreResult};

/// 按凭证创建记录客户端
///
/// 每次 present / cleanup 都用新解析出的凭证创建一次，测试时替换为假实现。
pub trait RecordClientFactory: Send + Sync {
    fn create(&self, credentials: &ProviderCredentials) -> Arc<dyn DnsRecordClient>;
}

/// 创建 `BunnyProvider`，所有实例共享同一个 HTTP 连接池
#[derive(Debug, Clone)]
pub struct BunnyClientFactory {
    client: Client,
    api_base: String,
}

impl BunnyClientFactory {
    /// # Arguments
    /// * `api_base` - API 地址，默认 `https://api.bunny.net`
    /// * `timeout` - 单个请求的超时时间
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bunny-solver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoreError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }
}

impl Default for BunnyClientFactory {
    fn default() -> Self {
        Self {
            client: Client::new(),
            api_base: BUNNY_API_BASE.to_string(),
        }
    }
}

impl RecordClientFactory for BunnyClientFactory {
    fn create(&self, credentials: &ProviderCredentials) -> Arc<dyn DnsRecordClient> {
        Arc::new(BunnyProvider::with_client(
            self.client.clone(),
            self.api_base.clone(),
            credentials.api_key.clone(),
        ))
    }
}
