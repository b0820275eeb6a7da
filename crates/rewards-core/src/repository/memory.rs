//! 内存仓储
//!
//! 参考实现：快照保存在进程内，持久化钩子原地更新对应记录。

use async_trait::async_trait;
use parking_lot::RwLock;

use campus_shared::error::{CampusError, Result};

use super::traits::{CampusSnapshot, SnapshotRepository};
use crate::models::{Event, User};

/// 内存仓储
pub struct MemoryRepository {
    snapshot: RwLock<CampusSnapshot>,
}

impl MemoryRepository {
    pub fn new(snapshot: CampusSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    /// 当前持久化视图的副本，测试用
    pub fn current(&self) -> CampusSnapshot {
        self.snapshot.read().clone()
    }
}

#[async_trait]
impl SnapshotRepository for MemoryRepository {
    async fn load(&self) -> Result<CampusSnapshot> {
        Ok(self.snapshot.read().clone())
    }

    async fn persist_event(&self, event: &Event) -> Result<()> {
        let mut snapshot = self.snapshot.write();
        let slot = snapshot
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| {
                CampusError::Storage(format!("持久化目标活动不存在: id={}", event.id))
            })?;
        *slot = event.clone();
        Ok(())
    }

    async fn persist_user(&self, user: &User) -> Result<()> {
        let mut snapshot = self.snapshot.write();
        let slot = snapshot
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| {
                CampusError::Storage(format!("持久化目标用户不存在: id={}", user.id))
            })?;
        *slot = user.clone();
        Ok(())
    }
}
