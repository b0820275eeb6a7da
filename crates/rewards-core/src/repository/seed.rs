//! JSON 种子仓储
//!
//! 从 JSON 快照文件启动加载。演示后端：持久化钩子只记录日志，
//! 不回写文件。

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use campus_shared::error::{CampusError, Result};

use super::traits::{CampusSnapshot, SnapshotRepository};
use crate::models::{Event, User};

/// JSON 种子文件仓储
pub struct JsonSeedRepository {
    path: PathBuf,
}

impl JsonSeedRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotRepository for JsonSeedRepository {
    async fn load(&self) -> Result<CampusSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CampusError::Storage(format!("读取种子文件失败 {}: {}", self.path.display(), e))
        })?;

        let snapshot: CampusSnapshot = serde_json::from_str(&raw).map_err(|e| {
            CampusError::Storage(format!("解析种子文件失败 {}: {}", self.path.display(), e))
        })?;

        info!(
            path = %self.path.display(),
            events = snapshot.events.len(),
            users = snapshot.users.len(),
            prizes = snapshot.prizes.len(),
            "种子文件加载完成"
        );
        Ok(snapshot)
    }

    async fn persist_event(&self, event: &Event) -> Result<()> {
        debug!(event_id = event.id, rsvp_count = event.rsvp_count, "种子后端忽略活动持久化");
        Ok(())
    }

    async fn persist_user(&self, user: &User) -> Result<()> {
        debug!(user_id = user.id, points = user.points, "种子后端忽略用户持久化");
        Ok(())
    }
}
