//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// 构建业务 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 活动
        .route("/events", get(handlers::events::list_events))
        .route("/events/{id}/rsvp", post(handlers::events::rsvp_event))
        // 用户与排行榜
        .route("/users", get(handlers::users::list_users))
        .route("/leaderboard", get(handlers::users::get_leaderboard))
        // 奖品与兑换资格
        .route("/prizes", get(handlers::prizes::list_prizes))
        .route(
            "/users/{id}/prizes",
            get(handlers::prizes::eligible_prizes),
        )
        // 签到
        .route("/checkin", post(handlers::checkin::check_in))
        // 校园伙伴
        .route("/campus-buddy", post(handlers::buddy::campus_buddy))
}

/// 组装完整应用
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .with_state(state)
}

/// 健康检查
async fn health() -> &'static str {
    "ok"
}
