//! 测试工具模块
//!
//! 提供测试所需的唯一标识生成器和配置辅助函数，
//! 用于简化测试代码编写，提高测试的可重复性。

use std::sync::atomic::{AtomicI64, Ordering};

use uuid::Uuid;

use crate::config::AppConfig;

/// 测试实体 id 计数器
///
/// 从一个较大的起始值开始，避免与种子数据中的固定 id 冲突
static NEXT_TEST_ID: AtomicI64 = AtomicI64::new(10_000);

/// 生成唯一的测试实体 id
///
/// 使用原子计数器确保并行测试时的唯一性
pub fn next_test_id() -> i64 {
    NEXT_TEST_ID.fetch_add(1, Ordering::Relaxed)
}

/// 生成唯一的测试名称
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// 创建测试用应用配置
///
/// 绑定随机端口，禁用种子文件加载
pub fn test_app_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.service_name = "rewards-service-test".to_string();
    config.environment = "test".to_string();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_test_id_unique() {
        let a = next_test_id();
        let b = next_test_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_unique_name() {
        let a = unique_name("user");
        let b = unique_name("user");
        assert!(a.starts_with("user-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_app_config_defaults() {
        let config = test_app_config();
        assert_eq!(config.environment, "test");
        assert_eq!(config.server.port, 0);
        assert!(config.catalog.seed_path.is_none());
    }
}
