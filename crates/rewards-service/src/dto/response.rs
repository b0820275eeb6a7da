//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构。

use chrono::{DateTime, Utc};
use serde::Serialize;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

    /// 创建成功响应（自定义消息）
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// 创建错误响应
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}

/// 校园伙伴应答
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}
