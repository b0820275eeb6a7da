//! API 流程集成测试
//!
//! 直接驱动处理器走完典型用户流程：RSVP 到满员、签到拿积分、
//! 排行榜变动、兑换资格扩大。

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use rewards_core::{
    CampusSnapshot, MemoryRepository, PointSource, SnapshotRepository,
};
use rewards_service::buddy::ResponsePicker;
use rewards_service::dto::CheckinRequest;
use rewards_service::handlers;
use rewards_service::state::AppState;

/// 固定积分来源，流程测试里核对精确余额
struct FixedPoints(u32);

impl PointSource for FixedPoints {
    fn draw(&self) -> u32 {
        self.0
    }
}

/// 固定下标选择器
struct FirstPicker;

impl ResponsePicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

fn state_with_fixed_points(points: u32) -> AppState {
    let snapshot = CampusSnapshot::sample();
    let repository: Arc<dyn SnapshotRepository> =
        Arc::new(MemoryRepository::new(snapshot.clone()));
    AppState::with_sources(
        snapshot,
        repository,
        Arc::new(FixedPoints(points)),
        Arc::new(FirstPicker),
    )
}

#[tokio::test]
async fn test_rsvp_until_full_flow() {
    let state = state_with_fixed_points(10);

    // 活动 3 容量 50，已有 23 人，还能接受 27 次 RSVP
    for expected in 24..=50 {
        let resp = handlers::events::rsvp_event(State(state.clone()), Path(3))
            .await
            .unwrap();
        assert_eq!(resp.0.data.unwrap().new_count, expected);
    }

    // 第 28 次被拒绝，计数保持在容量上限
    let err = handlers::events::rsvp_event(State(state.clone()), Path(3))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), "EVENT_FULL");

    let event = state.catalog.get_event(3).unwrap();
    assert_eq!(event.rsvp_count, event.max_capacity);
}

#[tokio::test]
async fn test_checkin_moves_leaderboard() {
    // 每次签到固定 50 分：Sarah（980 分）六次签到后超过 Alex（1250 分）
    let state = state_with_fixed_points(50);

    for _ in 0..6 {
        let req = CheckinRequest {
            user_id: 2,
            event_id: 1,
        };
        handlers::checkin::check_in(State(state.clone()), Json(req))
            .await
            .unwrap();
    }

    let Json(resp) = handlers::users::get_leaderboard(State(state.clone())).await;
    let ranked = resp.data.unwrap();
    assert_eq!(ranked[0].id, 2);
    assert_eq!(ranked[0].points, 980 + 6 * 50);

    // 跨过 1000 分阈值后获得 Campus Legend 徽章
    assert!(ranked[0].has_badge("Campus Legend"));
}

#[tokio::test]
async fn test_checkin_expands_redemption_eligibility() {
    // 新用户 0 分起步，最便宜的奖品要 300 分
    let mut snapshot = CampusSnapshot::sample();
    snapshot.users[0].points = 0;
    snapshot.users[0].badges.clear();

    let repository: Arc<dyn SnapshotRepository> =
        Arc::new(MemoryRepository::new(snapshot.clone()));
    let state = AppState::with_sources(
        snapshot,
        repository,
        Arc::new(FixedPoints(50)),
        Arc::new(FirstPicker),
    );

    let resp = handlers::prizes::eligible_prizes(State(state.clone()), Path(1))
        .await
        .unwrap();
    assert!(resp.0.data.unwrap().is_empty());

    // 六次签到共 300 分，解锁 Campus Dining Credit
    for _ in 0..6 {
        let req = CheckinRequest {
            user_id: 1,
            event_id: 2,
        };
        handlers::checkin::check_in(State(state.clone()), Json(req))
            .await
            .unwrap();
    }

    let resp = handlers::prizes::eligible_prizes(State(state.clone()), Path(1))
        .await
        .unwrap();
    let ids: Vec<i64> = resp.0.data.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_persist_hooks_reach_repository() {
    let state = state_with_fixed_points(25);

    handlers::events::rsvp_event(State(state.clone()), Path(1))
        .await
        .unwrap();
    let req = CheckinRequest {
        user_id: 1,
        event_id: 1,
    };
    handlers::checkin::check_in(State(state.clone()), Json(req))
        .await
        .unwrap();

    let persisted = state.repository.load().await.unwrap();
    assert_eq!(persisted.events[0].rsvp_count, 46);
    assert_eq!(persisted.users[0].points, 1250 + 25);
}
