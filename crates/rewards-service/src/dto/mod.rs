//! 请求/响应 DTO 定义

pub mod request;
pub mod response;

pub use request::{BuddyRequest, CheckinRequest};
pub use response::{ApiResponse, BuddyReply};
