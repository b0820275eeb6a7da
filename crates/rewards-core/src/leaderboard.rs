//! 排行榜
//!
//! 按积分从高到低对全部用户排序。纯读操作，无副作用，
//! 可与任意其他操作并发调用。

use std::sync::Arc;

use crate::ledger::UserLedger;
use crate::models::User;

/// 排行榜
pub struct LeaderboardRanker {
    ledger: Arc<UserLedger>,
}

impl LeaderboardRanker {
    pub fn new(ledger: Arc<UserLedger>) -> Self {
        Self { ledger }
    }

    /// 生成当前排行榜快照
    ///
    /// sort_by 是稳定排序：积分相同的用户保持账本载入时的
    /// 相对顺序。
    pub fn rank(&self) -> Vec<User> {
        let mut users = self.ledger.list_users();
        users.sort_by(|a, b| b.points.cmp(&a.points));
        users
    }
}
