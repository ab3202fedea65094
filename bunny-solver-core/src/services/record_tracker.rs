//! 记录 ID 跟踪
//!
//! present 时保存服务商返回的记录 ID，cleanup 时按同一个验证请求取回，
//! 不同验证请求之间互不影响。
//!
//! 每个验证请求一个槽位，present / cleanup 全程持有槽位锁，同一验证请求的并发调用
//! 依次执行。槽位在记录创建成功后保留到 cleanup 成功为止；没有记录且无人等待的槽位
//! 在 [`RecordTracker::release`] 时移除。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// 一个验证请求对应的记录：zone + 记录名 + TXT 值
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub zone_id: i64,
    pub name: String,
    pub value: String,
}

impl RecordKey {
    pub fn new(zone_id: i64, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            zone_id,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 已锁定的槽位，内容为已创建记录的 ID
pub type RecordSlot = OwnedMutexGuard<Option<i64>>;

#[derive(Debug, Default)]
pub struct RecordTracker {
    slots: RwLock<HashMap<RecordKey, Arc<Mutex<Option<i64>>>>>,
}

impl RecordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 锁定验证请求的槽位，同一 key 的其他调用在 [`Self::release`] 之前等待
    pub async fn lock(&self, key: &RecordKey) -> RecordSlot {
        let slot = {
            let mut slots = self.slots.write().await;
            slots.entry(key.clone()).or_default().clone()
        };
        slot.lock_owned().await
    }

    /// 释放槽位
    pub async fn release(&self, key: &RecordKey, slot: RecordSlot) {
        if slot.is_none() {
            let mut slots = self.slots.write().await;
            // map 和 `slot` 各持有一份引用，多出来的是正在等待的调用
            if slots
                .get(key)
                .is_some_and(|entry| Arc::strong_count(entry) == 2)
            {
                slots.remove(key);
            }
        }
        drop(slot);
    }

    /// 当前槽位数，调用都结束后即为已创建且未清理的记录数
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }
}
