//! 校园伙伴 API 处理器

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::debug;
use validator::Validate;

use crate::{
    dto::{ApiResponse, BuddyReply, BuddyRequest},
    error::ServiceError,
    state::AppState,
};

/// 校园伙伴应答
///
/// POST /api/campus-buddy
pub async fn campus_buddy(
    State(state): State<AppState>,
    Json(req): Json<BuddyRequest>,
) -> Result<Json<ApiResponse<BuddyReply>>, ServiceError> {
    req.validate()?;

    debug!(prompt_len = req.prompt.len(), "收到校园伙伴请求");

    let reply = BuddyReply {
        response: state.buddy.respond(),
        timestamp: Utc::now(),
    };
    Ok(Json(ApiResponse::success(reply)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests_support::test_state;

    #[tokio::test]
    async fn test_buddy_returns_first_response_with_fixed_picker() {
        let state = test_state();

        let req = BuddyRequest {
            prompt: "how is my day".to_string(),
        };
        let resp = campus_buddy(State(state), Json(req)).await.unwrap();

        let reply = resp.0.data.unwrap();
        assert_eq!(reply.response, "OMG that's totally valid! 💅✨");
    }

    #[tokio::test]
    async fn test_buddy_oversized_prompt_rejected() {
        let state = test_state();

        let req = BuddyRequest {
            prompt: "x".repeat(2001),
        };
        let err = campus_buddy(State(state), Json(req)).await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
