//! 奖品与兑换资格 API 处理器

use axum::{
    Json,
    extract::{Path, State},
};

use rewards_core::Prize;

use crate::{dto::ApiResponse, error::ServiceError, state::AppState};

/// 列出全部奖品
///
/// GET /api/prizes
pub async fn list_prizes(State(state): State<AppState>) -> Json<ApiResponse<Vec<Prize>>> {
    Json(ApiResponse::success(state.catalog.list_prizes()))
}

/// 列出用户可兑换的奖品
///
/// GET /api/users/{id}/prizes
pub async fn eligible_prizes(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Prize>>>, ServiceError> {
    let prizes = state.redemption.eligible_prizes(user_id)?;
    Ok(Json(ApiResponse::success(prizes)))
}
