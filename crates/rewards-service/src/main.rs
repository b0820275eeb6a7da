//! 校园奖励服务入口
//!
//! 加载配置与种子数据，构建核心存储与引擎并启动 HTTP 服务。

use std::sync::Arc;

use axum::http::HeaderValue;
use campus_shared::{config::AppConfig, observability};
use rewards_core::{CampusSnapshot, JsonSeedRepository, MemoryRepository, SnapshotRepository};
use rewards_service::{routes, state::AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：从 config/{service_name}.toml 加载，包含可观测性配置
    let config = AppConfig::load("rewards-service").unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // 从 AppConfig 中提取可观测性配置并注入服务名
    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config)?;

    info!("Starting rewards-service on {}", config.server_addr());

    // 选择存储后端：配置了种子文件则从文件加载，否则使用内置演示数据
    let repository: Arc<dyn SnapshotRepository> = match &config.catalog.seed_path {
        Some(path) => Arc::new(JsonSeedRepository::new(path)),
        None => Arc::new(MemoryRepository::new(CampusSnapshot::sample())),
    };

    let snapshot = match repository.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("快照加载失败: {}，回退到内置演示数据", e);
            CampusSnapshot::sample()
        }
    };
    info!(
        events = snapshot.events.len(),
        users = snapshot.users.len(),
        prizes = snapshot.prizes.len(),
        "快照加载完成"
    );

    let state = AppState::new(snapshot, repository);

    // CORS 配置：通过 CAMPUS_CORS_ORIGINS 环境变量控制允许的来源
    // 默认允许本地开发地址，生产环境应设置为实际域名
    let allowed_origins = std::env::var("CAMPUS_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    let cors = if allowed_origins == "*" {
        if config.is_production() {
            warn!("CAMPUS_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = routes::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("HTTP server listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service shutdown complete");
    Ok(())
}

/// 优雅关闭信号处理
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        }
    }
}
