//! 枚举类型定义

use serde::{Deserialize, Serialize};

/// 活动分类
///
/// 决定活动在前端的分组展示方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    /// 体育赛事
    Sports,
    /// 音乐演出
    Music,
    /// 学术活动
    Academic,
    /// 社交活动
    Social,
    /// 艺术展演
    Arts,
    /// 其他
    #[default]
    Other,
}
