//! 校园奖励 HTTP 服务
//!
//! 将核心引擎的操作映射为 REST API。本层只做请求编组与错误
//! 翻译，所有业务规则都在 `rewards_core` 中实现。
//!
//! ## 模块结构
//!
//! - `routes`: 路由映射
//! - `handlers`: 各资源的请求处理器
//! - `dto`: 请求/响应结构定义
//! - `state`: 服务共享状态
//! - `error`: 错误到 HTTP 状态码的翻译
//! - `buddy`: 校园伙伴固定应答器

pub mod buddy;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
