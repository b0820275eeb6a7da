//! 服务共享状态
//!
//! 所有存储与引擎在进程启动时显式构建并通过 Arc 注入，
//! 不依赖任何进程级单例。

use std::sync::Arc;

use rewards_core::{
    CampusSnapshot, CatalogStore, CheckinEngine, LeaderboardRanker, PointSource,
    RedemptionEvaluator, RsvpEngine, SnapshotRepository, UniformPointSource, UserLedger,
    default_rules,
};

use crate::buddy::{BuddyResponder, RandomPicker, ResponsePicker};

/// 服务共享状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub ledger: Arc<UserLedger>,
    pub rsvp: Arc<RsvpEngine>,
    pub checkin: Arc<CheckinEngine>,
    pub leaderboard: Arc<LeaderboardRanker>,
    pub redemption: Arc<RedemptionEvaluator>,
    pub buddy: Arc<BuddyResponder>,
    pub repository: Arc<dyn SnapshotRepository>,
}

impl AppState {
    /// 使用生产随机源构建状态
    pub fn new(snapshot: CampusSnapshot, repository: Arc<dyn SnapshotRepository>) -> Self {
        Self::with_sources(
            snapshot,
            repository,
            Arc::new(UniformPointSource),
            Arc::new(RandomPicker),
        )
    }

    /// 注入自定义随机源构建状态，测试用
    pub fn with_sources(
        snapshot: CampusSnapshot,
        repository: Arc<dyn SnapshotRepository>,
        points: Arc<dyn PointSource>,
        picker: Arc<dyn ResponsePicker>,
    ) -> Self {
        let catalog = Arc::new(CatalogStore::from_seed(snapshot.events, snapshot.prizes));
        let ledger = Arc::new(UserLedger::from_seed(snapshot.users));

        let rsvp = Arc::new(RsvpEngine::new(catalog.clone()));
        let checkin = Arc::new(CheckinEngine::new(
            ledger.clone(),
            catalog.clone(),
            default_rules(),
            points,
        ));
        let leaderboard = Arc::new(LeaderboardRanker::new(ledger.clone()));
        let redemption = Arc::new(RedemptionEvaluator::new(ledger.clone(), catalog.clone()));
        let buddy = Arc::new(BuddyResponder::new(picker));

        Self {
            catalog,
            ledger,
            rsvp,
            checkin,
            leaderboard,
            redemption,
            buddy,
            repository,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    //! 处理器单元测试共享的状态构造

    use super::*;
    use rewards_core::{MemoryRepository, SeededPointSource};

    /// 固定选择第一条应答的选择器
    pub struct FirstPicker;

    impl ResponsePicker for FirstPicker {
        fn pick(&self, _len: usize) -> usize {
            0
        }
    }

    /// 基于演示快照与确定性随机源构建测试状态
    pub fn test_state() -> AppState {
        let snapshot = CampusSnapshot::sample();
        let repository = Arc::new(MemoryRepository::new(snapshot.clone()));
        AppState::with_sources(
            snapshot,
            repository,
            Arc::new(SeededPointSource::new(7)),
            Arc::new(FirstPicker),
        )
    }
}
