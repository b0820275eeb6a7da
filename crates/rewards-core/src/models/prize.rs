//! 奖品实体定义

use serde::{Deserialize, Serialize};

/// 兑换目录中的奖品
///
/// 创建后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: i64,
    /// 奖品名称
    pub name: String,
    /// 兑换所需积分
    pub points_required: u64,
    /// 奖品描述
    pub description: String,
}
