//! 引擎结果载荷定义
//!
//! 各引擎操作的成功返回值，与领域实体分离。

use serde::Serialize;

/// RSVP 成功结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpAccepted {
    pub accepted: bool,
    /// 自增后的 RSVP 人数
    pub new_count: u32,
    /// 活动容量上限
    pub capacity: u32,
}

/// 签到成功结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinOutcome {
    pub awarded: bool,
    /// 本次获得的积分
    pub points_earned: u32,
    /// 更新后的积分余额
    pub new_balance: u64,
    /// 本次新发放的徽章，按规则顺序排列
    pub badges_granted: Vec<String>,
}
