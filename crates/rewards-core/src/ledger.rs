//! 用户积分账本
//!
//! 与目录存储相同的结构：DashMap 提供线程安全访问，
//! 载入顺序索引保证列表操作的稳定顺序。

use dashmap::DashMap;
use dashmap::mapref::one::RefMut;
use tracing::warn;

use crate::models::User;

/// 用户账本
///
/// User 记录的唯一属主。`points` 与 `badges` 的修改路径仅限
/// 签到奖励引擎通过 `user_mut` 获取的独占 guard。
pub struct UserLedger {
    users: DashMap<i64, User>,
    /// 用户载入顺序，构建后不再变化
    user_order: Vec<i64>,
}

impl UserLedger {
    /// 从种子数据构建账本
    ///
    /// 重复 id 只保留先出现的记录。
    pub fn from_seed(users: Vec<User>) -> Self {
        let user_map = DashMap::new();
        let mut user_order = Vec::with_capacity(users.len());
        for user in users {
            if user_map.contains_key(&user.id) {
                warn!(user_id = user.id, "种子数据中的用户 id 重复，已跳过");
                continue;
            }
            user_order.push(user.id);
            user_map.insert(user.id, user);
        }

        Self {
            users: user_map,
            user_order,
        }
    }

    /// 查询单个用户
    pub fn get_user(&self, id: i64) -> Option<User> {
        self.users.get(&id).map(|u| u.clone())
    }

    /// 按载入顺序列出全部用户
    pub fn list_users(&self) -> Vec<User> {
        self.user_order
            .iter()
            .filter_map(|id| self.users.get(id).map(|u| u.clone()))
            .collect()
    }

    /// 用户数量
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// 签到奖励引擎专用的独占访问入口
    ///
    /// guard 存续期间对应条目被独占锁定，积分更新与徽章评估
    /// 在同一 guard 内完成即是一个原子步骤。
    pub(crate) fn user_mut(&self, id: i64) -> Option<RefMut<'_, i64, User>> {
        self.users.get_mut(&id)
    }
}
