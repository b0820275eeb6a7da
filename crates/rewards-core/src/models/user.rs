//! 用户实体定义

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// 用户积分账户
///
/// 账户在开通时创建，进程生命周期内不会删除。
/// `points` 与 `badges` 只能由签到奖励引擎通过账本的独占入口修改。
/// 徽章是集合语义：无重复、顺序无关、发放后不撤销。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    /// 显示名称
    pub name: String,
    /// 联系邮箱
    pub email: String,
    /// 积分余额
    pub points: u64,
    /// 已获得的徽章名称集合
    #[serde(default)]
    pub badges: BTreeSet<String>,
}

impl User {
    /// 是否持有指定徽章
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.contains(badge)
    }

    /// 发放徽章，返回是否为新获得
    ///
    /// 重复发放是无操作，集合中不会出现重复项。
    pub fn grant_badge(&mut self, badge: &str) -> bool {
        self.badges.insert(badge.to_string())
    }
}
