//! 统一错误处理模块
//!
//! 定义系统中所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 核心引擎的每个操作都返回判别结果，错误不会越过自身边界向外抛出，
//! 失败的操作不产生任何部分修改。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum CampusError {
    // ==================== 资源错误 ====================
    #[error("记录未找到: {entity} id={id}")]
    NotFound { entity: String, id: i64 },

    // ==================== 业务逻辑错误 ====================
    #[error("活动已满员: event_id={event_id} capacity={capacity}")]
    EventFull { event_id: i64, capacity: u32 },

    // ==================== 验证错误 ====================
    #[error("参数验证失败: {0}")]
    Validation(String),

    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    // ==================== 存储错误 ====================
    #[error("存储后端错误: {0}")]
    Storage(String),

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, CampusError>;

impl CampusError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::EventFull { .. } => "EVENT_FULL",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 便捷构造：实体未找到
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// 便捷构造：参数无效
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}
