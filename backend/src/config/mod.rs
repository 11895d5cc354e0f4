//! Configuration management for the BMI backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: BMI__)

use anyhow::Result;
use bmi_shared::CategoryBands;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub bmi: BmiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on request handling time
    pub request_timeout_secs: u64,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

/// Calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiConfig {
    /// Threshold set used to classify BMI values
    #[serde(default)]
    pub category_bands: CategoryBands,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
                max_body_bytes: 16 * 1024,
            },
            bmi: BmiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with BMI__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., BMI__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("BMI").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Collect configuration problems that would break request handling
    pub fn validate(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.server.request_timeout_secs == 0 {
            errors.push("server.request_timeout_secs must be greater than zero");
        }
        if self.server.max_body_bytes == 0 {
            errors.push("server.max_body_bytes must be greater than zero");
        }
        errors
    }
}
