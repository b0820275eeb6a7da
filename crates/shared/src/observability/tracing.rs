//! 日志与追踪初始化
//!
//! 基于 tracing-subscriber 构建订阅器：EnvFilter 过滤 +
//! pretty/JSON 两种输出格式，由配置选择。

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::ObservabilityConfig;

/// 初始化全局订阅器
///
/// 过滤规则优先读取 RUST_LOG 环境变量，其次使用配置中的
/// log_level。重复初始化（如并行测试）返回错误由调用方决定
/// 是否忽略。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("初始化 tracing 订阅器失败: {}", e))?;

    Ok(())
}
