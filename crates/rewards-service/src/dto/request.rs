//! 请求 DTO 定义
//!
//! 所有 REST API 的请求体结构。格式错误在这里被拒绝，
//! 不会到达核心层。

use serde::Deserialize;
use validator::Validate;

/// 签到请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRequest {
    #[validate(range(min = 1, message = "用户 id 必须为正整数"))]
    pub user_id: i64,
    #[validate(range(min = 1, message = "活动 id 必须为正整数"))]
    pub event_id: i64,
}

/// 校园伙伴请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BuddyRequest {
    /// 用户输入，当前仅记录日志，不参与应答选择
    #[serde(default)]
    #[validate(length(max = 2000, message = "输入长度不能超过 2000 个字符"))]
    pub prompt: String,
}
