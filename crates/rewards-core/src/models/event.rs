//! 活动实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::EventCategory;

/// 校园活动
///
/// 活动在目录加载时创建，进程生命周期内不会删除。
/// 不变式：`0 <= rsvp_count <= max_capacity`，其中 `rsvp_count`
/// 只能由 RSVP 引擎通过目录存储的独占入口修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    /// 活动标题
    pub title: String,
    /// 活动分类
    pub category: EventCategory,
    /// 开始时间
    pub start_time: DateTime<Utc>,
    /// 地点
    pub location: String,
    /// 活动描述
    pub description: String,
    /// 当前 RSVP 人数
    pub rsvp_count: u32,
    /// 容量上限
    pub max_capacity: u32,
}

impl Event {
    /// 是否已满员
    pub fn is_full(&self) -> bool {
        self.rsvp_count >= self.max_capacity
    }

    /// 剩余名额
    pub fn remaining(&self) -> u32 {
        self.max_capacity.saturating_sub(self.rsvp_count)
    }
}
