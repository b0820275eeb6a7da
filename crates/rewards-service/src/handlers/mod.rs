//! API 处理器
//!
//! 每个处理器只做三件事：提取参数、调用一个引擎操作、
//! 包装统一响应。

pub mod buddy;
pub mod checkin;
pub mod events;
pub mod prizes;
pub mod users;
