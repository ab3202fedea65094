//! bunny.net DNS-01 求解器
//!
//! present: 解析凭证 -> 创建 TXT 记录 -> 记下记录 ID
//! cleanup: 解析凭证 -> 取回记录 ID（取不到则按名称和值查找）-> 删除记录

use std::sync::Arc;

use async_trait::async_trait;
use bunny_dns_provider::{DnsRecordClient, ProviderError, TxtRecord};
use rand::Rng;
use tokio::sync::OnceCell;

use crate::error::{CoreError, CoreResult};
use crate::services::{CredentialService, RecordKey, RecordTracker};
use crate::traits::{RecordClientFactory, SecretStore, Solver};
use crate::types::ChallengeRequest;

/// 求解器名称，Issuer 中的 `solverName`
pub const SOLVER_NAME: &str = "bunny";

/// 客户端生成的记录 ID 上限
const MAX_RECORD_ID: i64 = 99_999_999_999;

pub struct BunnySolver {
    credentials: OnceCell<CredentialService>,
    clients: Arc<dyn RecordClientFactory>,
    tracker: RecordTracker,
}

impl BunnySolver {
    #[must_use]
    pub fn new(clients: Arc<dyn RecordClientFactory>) -> Self {
        Self {
            credentials: OnceCell::new(),
            clients,
            tracker: RecordTracker::new(),
        }
    }

    /// 当前跟踪中的记录数
    pub async fn tracked_records(&self) -> usize {
        self.tracker.len().await
    }

    fn credential_service(&self) -> CoreResult<&CredentialService> {
        self.credentials.get().ok_or(CoreError::NotInitialized)
    }
}

#[async_trait]
impl Solver for BunnySolver {
    fn name(&self) -> &'static str {
        SOLVER_NAME
    }

    fn initialize(&self, secret_store: Arc<dyn SecretStore>) -> CoreResult<()> {
        self.credentials
            .set(CredentialService::new(secret_store))
            .map_err(|_| CoreError::AlreadyInitialized)
    }

    async fn present(&self, request: &ChallengeRequest) -> CoreResult<()> {
        let credentials = self.credential_service()?.resolve(request).await?;
        let zone_id = credentials.zone_id;
        let key = RecordKey::new(zone_id, &request.dns_name, &request.key);

        // 同一验证请求的 present 依次执行，后到的调用看到先前创建的记录
        let mut slot = self.tracker.lock(&key).await;
        let tracked = *slot;

        let result = match tracked {
            Some(record_id) => {
                log::info!(
                    "TXT record for {} already present in zone {zone_id} (id {record_id})",
                    request.dns_name
                );
                Ok(())
            }
            None => {
                let record = TxtRecord::new(generate_record_id(), &request.dns_name, &request.key);
                let client = self.clients.create(&credentials);
                match client.create_txt_record(zone_id, &record).await {
                    Ok(record_id) => {
                        *slot = Some(record_id);
                        Ok(())
                    }
                    Err(e) => Err(e.into()),
                }
            }
        };

        self.tracker.release(&key, slot).await;
        result
    }

    async fn cleanup(&self, request: &ChallengeRequest) -> CoreResult<()> {
        let credentials = self.credential_service()?.resolve(request).await?;
        let zone_id = credentials.zone_id;
        let key = RecordKey::new(zone_id, &request.dns_name, &request.key);
        let client = self.clients.create(&credentials);

        let mut slot = self.tracker.lock(&key).await;
        let result = delete_records(client.as_ref(), zone_id, request, *slot).await;
        if result.is_ok() {
            *slot = None;
        }

        // 失败时保留跟踪，cert-manager 重试 cleanup 时还能找到
        self.tracker.release(&key, slot).await;
        result
    }
}

/// 删除记录：有跟踪的 ID 时直接删除，否则按名称和值查找
async fn delete_records(
    client: &dyn DnsRecordClient,
    zone_id: i64,
    request: &ChallengeRequest,
    tracked: Option<i64>,
) -> CoreResult<()> {
    let record_ids = match tracked {
        Some(record_id) => vec![record_id],
        None => {
            log::debug!(
                "No tracked record for {} in zone {zone_id}, looking it up",
                request.dns_name
            );
            client
                .find_txt_records(zone_id, &request.dns_name, &request.key)
                .await?
        }
    };

    if record_ids.is_empty() {
        log::warn!(
            "No TXT record for {} found in zone {zone_id}, nothing to clean up",
            request.dns_name
        );
        return Ok(());
    }

    for record_id in record_ids {
        match client.delete_record(zone_id, record_id).await {
            Ok(()) => {}
            Err(ProviderError::RecordNotFound { .. }) => {
                log::warn!("Record {record_id} already removed from zone {zone_id}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn generate_record_id() -> i64 {
    rand::rng().random_range(1..=MAX_RECORD_ID)
}
