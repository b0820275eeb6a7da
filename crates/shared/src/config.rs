//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::observability::ObservabilityConfig;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 目录数据配置
///
/// `seed_path` 指向启动时加载的 JSON 快照文件；
/// 为空时使用内置演示数据。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub seed_path: Option<String>,
}

/// 应用配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（CAMPUS_ 前缀，如 CAMPUS_SERVER_PORT -> server.port）
    /// 5. 服务特定端口环境变量（如 REWARDS_SERVICE_PORT）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("CAMPUS_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            // 默认配置
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            // 加载默认配置文件
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            // 加载环境特定配置
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            // 加载服务特定配置（如 rewards-service.toml）
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            )
            // 环境变量覆盖（CAMPUS_SERVER_PORT -> server.port）
            .add_source(
                Environment::with_prefix("CAMPUS")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        // 服务特定端口环境变量覆盖
        // 将服务名转换为环境变量名：rewards-service -> REWARDS_SERVICE_PORT
        if let Some(port) = Self::get_service_port_from_env(service_name) {
            config.server.port = port;
        }

        Ok(config)
    }

    /// 从环境变量获取服务特定端口
    ///
    /// 将 "rewards-service" 转换为 "REWARDS_SERVICE_PORT"
    fn get_service_port_from_env(service_name: &str) -> Option<u16> {
        let env_var_name = format!("{}_PORT", service_name.to_uppercase().replace('-', "_"));
        std::env::var(&env_var_name)
            .ok()
            .and_then(|v| v.parse().ok())
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
