//! 活动 API 处理器

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::warn;

use rewards_core::{Event, RsvpAccepted};

use crate::{dto::ApiResponse, error::ServiceError, state::AppState};

/// 列出全部活动
///
/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Json<ApiResponse<Vec<Event>>> {
    Json(ApiResponse::success(state.catalog.list_events()))
}

/// 对指定活动 RSVP
///
/// POST /api/events/{id}/rsvp
pub async fn rsvp_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<ApiResponse<RsvpAccepted>>, ServiceError> {
    let result = state.rsvp.attempt_rsvp(event_id)?;

    // 变更成功后触发持久化钩子；钩子失败只记录告警，不影响响应
    if let Some(event) = state.catalog.get_event(event_id)
        && let Err(e) = state.repository.persist_event(&event).await
    {
        warn!(event_id, error = %e, "活动持久化失败");
    }

    Ok(Json(ApiResponse::success_with_message(result, "RSVP 成功")))
}
