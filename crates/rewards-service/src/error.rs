//! 服务错误类型定义
//!
//! 在共享库 CampusError 基础上补充请求体验证错误，并负责
//! 错误到 HTTP 状态码与统一响应体的翻译。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use campus_shared::error::CampusError;

use crate::dto::ApiResponse;

/// 服务错误
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// 请求体验证失败（validator 派生规则）
    #[error("参数验证失败: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// 透传核心错误，避免在每个处理器手动转换
    #[error(transparent)]
    Campus(#[from] CampusError),
}

impl ServiceError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Campus(err) => match err {
                CampusError::NotFound { .. } => StatusCode::NOT_FOUND,
                CampusError::EventFull { .. }
                | CampusError::Validation(_)
                | CampusError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
                CampusError::Storage(_) | CampusError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// 返回稳定错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Campus(err) => err.code(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::<()>::error(self.code(), self.to_string()));
        (status, body).into_response()
    }
}
