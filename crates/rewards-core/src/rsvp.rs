//! RSVP 引擎
//!
//! 对单个活动执行容量检查与计数自增。两步在同一独占 guard 内
//! 完成，临近满员时的并发 RSVP 不会超订。

use std::sync::Arc;

use tracing::{info, instrument, warn};

use campus_shared::error::{CampusError, Result};

use crate::catalog::CatalogStore;
use crate::dto::RsvpAccepted;

/// RSVP 引擎
pub struct RsvpEngine {
    catalog: Arc<CatalogStore>,
}

impl RsvpEngine {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// 尝试对指定活动 RSVP
    ///
    /// 每次成功调用都会使计数 +1。本操作不是幂等的：系统没有
    /// 按用户的 RSVP 记录，无法识别同一用户的重复提交，调用方
    /// 需要自行避免重复发送（已知限制）。
    #[instrument(skip(self))]
    pub fn attempt_rsvp(&self, event_id: i64) -> Result<RsvpAccepted> {
        if event_id <= 0 {
            return Err(CampusError::invalid_argument("event_id", "必须为正整数"));
        }

        // guard 存续期间独占该活动条目，容量检查与自增是一个原子步骤
        let mut event = self
            .catalog
            .event_mut(event_id)
            .ok_or_else(|| CampusError::not_found("Event", event_id))?;

        if event.is_full() {
            warn!(
                event_id,
                capacity = event.max_capacity,
                "活动已满员，RSVP 被拒绝"
            );
            return Err(CampusError::EventFull {
                event_id,
                capacity: event.max_capacity,
            });
        }

        event.rsvp_count += 1;
        let result = RsvpAccepted {
            accepted: true,
            new_count: event.rsvp_count,
            capacity: event.max_capacity,
        };
        drop(event);

        info!(
            event_id,
            new_count = result.new_count,
            capacity = result.capacity,
            "RSVP 成功"
        );
        Ok(result)
    }
}
