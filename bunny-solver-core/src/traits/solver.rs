//! 求解器生命周期 Trait

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::SecretStore;
use crate::types::ChallengeRequest;

/// DNS-01 求解器
///
/// 宿主按以下顺序调用：`initialize` 一次，之后可并发调用任意次 `present` / `cleanup`。
#[async_trait]
pub trait Solver: Send + Sync {
    /// 求解器名称，对应 Issuer 中的 `solverName`
    fn name(&self) -> &'static str;

    /// 保存 secret 存储句柄，必须在 `present` / `cleanup` 之前调用
    fn initialize(&self, secret_store: Arc<dyn SecretStore>) -> CoreResult<()>;

    /// 创建验证用的 TXT 记录
    async fn present(&self, request: &ChallengeRequest) -> CoreResult<()>;

    /// 删除 `present` 创建的 TXT 记录
    async fn cleanup(&self, request: &ChallengeRequest) -> CoreResult<()>;
}
