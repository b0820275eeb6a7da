//! 签到 API 处理器

use axum::{Json, extract::State};
use tracing::warn;
use validator::Validate;

use rewards_core::CheckinOutcome;

use crate::{
    dto::{ApiResponse, CheckinRequest},
    error::ServiceError,
    state::AppState,
};

/// 活动签到
///
/// POST /api/checkin
pub async fn check_in(
    State(state): State<AppState>,
    Json(req): Json<CheckinRequest>,
) -> Result<Json<ApiResponse<CheckinOutcome>>, ServiceError> {
    req.validate()?;

    let outcome = state.checkin.check_in(req.user_id, req.event_id)?;

    // 变更成功后触发持久化钩子；钩子失败只记录告警，不影响响应
    if let Some(user) = state.ledger.get_user(req.user_id)
        && let Err(e) = state.repository.persist_user(&user).await
    {
        warn!(user_id = req.user_id, error = %e, "用户持久化失败");
    }

    let message = format!("签到成功，+{} 积分", outcome.points_earned);
    Ok(Json(ApiResponse::success_with_message(outcome, message)))
}
