//! 统一可观测性模块
//!
//! 提供日志与追踪的统一初始化和管理。所有服务通过单一入口点
//! 配置可观测性，确保一致的日志格式与过滤规则。

pub mod tracing;

use ::tracing::info;
use anyhow::Result;
use serde::Deserialize;

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// 服务名称，用于标识日志来源
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// 日志级别（如 "info", "debug"）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 是否启用 JSON 格式日志
    #[serde(default)]
    pub json_logs: bool,
}

fn default_service_name() -> String {
    "unknown-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    /// 从环境变量加载配置
    pub fn from_env(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level()),
            json_logs: std::env::var("JSON_LOGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// 注入服务名（配置文件中通常不写 service_name）
    pub fn with_service_name(mut self, service_name: &str) -> Self {
        self.service_name = service_name.to_string();
        self
    }
}

/// 可观测性资源守卫
///
/// 持有日志订阅器的生命周期，在 Drop 时记录关闭日志。
pub struct ObservabilityGuard {
    _private: (),
}

impl ObservabilityGuard {
    /// 创建一个空的 Guard（用于测试或禁用可观测性时）
    pub fn empty() -> Self {
        Self { _private: () }
    }
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        info!("Shutting down observability...");
    }
}

/// 统一初始化可观测性
///
/// # Example
///
/// ```ignore
/// use campus_shared::observability::{init, ObservabilityConfig};
///
/// fn main() -> anyhow::Result<()> {
///     let config = ObservabilityConfig::from_env("rewards-service");
///     let _guard = init(&config)?;
///
///     // 应用逻辑...
///
///     Ok(())
/// }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<ObservabilityGuard> {
    tracing::init(config)?;

    info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Observability initialized"
    );

    Ok(ObservabilityGuard { _private: () })
}
