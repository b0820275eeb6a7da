//! 用户与排行榜 API 处理器

use axum::{Json, extract::State};

use rewards_core::User;

use crate::{dto::ApiResponse, state::AppState};

/// 列出全部用户
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(state.ledger.list_users()))
}

/// 获取排行榜
///
/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::success(state.leaderboard.rank()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests_support::test_state;

    #[tokio::test]
    async fn test_list_users_in_seed_order() {
        let state = test_state();

        let Json(resp) = list_users(State(state)).await;

        let ids: Vec<i64> = resp.data.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_leaderboard_points_descending() {
        let state = test_state();

        let Json(resp) = get_leaderboard(State(state)).await;

        let users = resp.data.unwrap();
        assert!(users[0].points >= users[1].points);
        // 演示数据：Alex 1250 分在前
        assert_eq!(users[0].id, 1);
    }
}
