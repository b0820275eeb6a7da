//! 签到奖励引擎
//!
//! 将一次签到转换为积分奖励与可能的徽章发放。积分更新与徽章
//! 评估在同一用户独占 guard 内完成，并发签到不会丢失更新。
//!
//! 积分来源可注入：生产环境使用均匀随机实现，测试注入确定性
//! 实现以断言精确输出。

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

use campus_shared::error::{CampusError, Result};

use crate::badges::{self, BadgeRule};
use crate::catalog::CatalogStore;
use crate::dto::CheckinOutcome;
use crate::ledger::UserLedger;

/// 单次签到奖励积分下限
pub const MIN_POINTS: u32 = 10;
/// 单次签到奖励积分上限（含）
pub const MAX_POINTS: u32 = 50;

/// 积分来源
///
/// 抽取一次签到奖励的积分值，约定返回值落在
/// `[MIN_POINTS, MAX_POINTS]` 闭区间内。
pub trait PointSource: Send + Sync {
    fn draw(&self) -> u32;
}

/// 均匀随机积分来源
pub struct UniformPointSource;

impl PointSource for UniformPointSource {
    fn draw(&self) -> u32 {
        rand::rng().random_range(MIN_POINTS..=MAX_POINTS)
    }
}

/// 确定性种子积分来源
///
/// 用固定种子驱动 StdRng，同一种子产生同一序列。
pub struct SeededPointSource {
    rng: Mutex<StdRng>,
}

impl SeededPointSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PointSource for SeededPointSource {
    fn draw(&self) -> u32 {
        self.rng.lock().random_range(MIN_POINTS..=MAX_POINTS)
    }
}

/// 签到奖励引擎
pub struct CheckinEngine {
    ledger: Arc<UserLedger>,
    catalog: Arc<CatalogStore>,
    /// 固定顺序的徽章规则列表
    rules: Vec<BadgeRule>,
    points: Arc<dyn PointSource>,
}

impl CheckinEngine {
    pub fn new(
        ledger: Arc<UserLedger>,
        catalog: Arc<CatalogStore>,
        rules: Vec<BadgeRule>,
        points: Arc<dyn PointSource>,
    ) -> Self {
        Self {
            ledger,
            catalog,
            rules,
            points,
        }
    }

    /// 处理一次签到
    ///
    /// `event_id` 仅作为上下文记录：当前不校验用户是否 RSVP 过
    /// 该活动或活动是否正在进行，沿用既有的宽松行为。
    #[instrument(skip(self))]
    pub fn check_in(&self, user_id: i64, event_id: i64) -> Result<CheckinOutcome> {
        if user_id <= 0 {
            return Err(CampusError::invalid_argument("user_id", "必须为正整数"));
        }
        if event_id <= 0 {
            return Err(CampusError::invalid_argument("event_id", "必须为正整数"));
        }

        let event_known = self.catalog.get_event(event_id).is_some();

        // guard 存续期间独占该用户条目，积分更新与徽章评估是一个原子步骤
        let mut user = self
            .ledger
            .user_mut(user_id)
            .ok_or_else(|| CampusError::not_found("User", user_id))?;

        let points_earned = self.points.draw();
        debug_assert!((MIN_POINTS..=MAX_POINTS).contains(&points_earned));

        user.points += points_earned as u64;
        let badges_granted = badges::evaluate(&self.rules, &mut user);
        let new_balance = user.points;
        drop(user);

        info!(
            user_id,
            event_id,
            event_known,
            points_earned,
            new_balance,
            badges_granted = badges_granted.len(),
            "签到成功"
        );

        Ok(CheckinOutcome {
            awarded: true,
            points_earned,
            new_balance,
            badges_granted,
        })
    }
}
