//! 校园活动奖励核心库
//!
//! 用户对容量受限的活动进行 RSVP，通过签到赚取积分、累积徽章、
//! 参与排行榜竞争，并用积分兑换奖品目录中的奖品。
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义（活动、用户、奖品）
//! - `catalog`: 活动与奖品目录存储
//! - `ledger`: 用户积分账本
//! - `rsvp`: RSVP 引擎（容量检查与计数自增）
//! - `checkin`: 签到奖励引擎（积分发放与徽章评估）
//! - `badges`: 徽章规则定义与评估
//! - `leaderboard`: 排行榜
//! - `redemption`: 兑换资格评估
//! - `repository`: 存储后端接口与参考实现
//!
//! HTTP 层只做请求编组，所有业务规则都在这里实现。每个操作的
//! 临界区只覆盖单个实体，跨实体事务不存在。

pub mod badges;
pub mod catalog;
pub mod checkin;
pub mod dto;
pub mod leaderboard;
pub mod ledger;
pub mod models;
pub mod redemption;
pub mod repository;
pub mod rsvp;

pub use badges::{BadgeRule, BadgeTrigger, default_rules};
pub use catalog::CatalogStore;
pub use checkin::{
    CheckinEngine, MAX_POINTS, MIN_POINTS, PointSource, SeededPointSource, UniformPointSource,
};
pub use dto::{CheckinOutcome, RsvpAccepted};
pub use leaderboard::LeaderboardRanker;
pub use ledger::UserLedger;
pub use models::{Event, EventCategory, Prize, User};
pub use redemption::RedemptionEvaluator;
pub use repository::{CampusSnapshot, JsonSeedRepository, MemoryRepository, SnapshotRepository};
pub use rsvp::RsvpEngine;
