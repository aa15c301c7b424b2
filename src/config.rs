use serde::Deserialize;
use std::env;
use std::net::SocketAddr;

use crate::types::{AppError, AppResult};

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_REGION: &str = "North-West Region";
pub const DEFAULT_PRODUCT: &str = "Ream of Paper";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub path: String,
    pub default_region: String,
    pub default_product: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                    .parse()
                    .map_err(|e| AppError::Config(format!("invalid PORT: {e}")))?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            data: DataConfig {
                path: env::var("SALES_DATA_PATH").unwrap_or_else(|_| "sales_data.csv".to_string()),
                default_region: env::var("DEFAULT_REGION")
                    .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
                default_product: env::var("DEFAULT_PRODUCT")
                    .unwrap_or_else(|_| DEFAULT_PRODUCT.to_string()),
            },
        })
    }

    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST/PORT: {e}")))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: "0.0.0.0".to_string(),
            },
            data: DataConfig {
                path: "sales_data.csv".to_string(),
                default_region: DEFAULT_REGION.to_string(),
                default_product: DEFAULT_PRODUCT.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        for key in ["PORT", "HOST", "SALES_DATA_PATH", "DEFAULT_REGION", "DEFAULT_PRODUCT"] {
            env::remove_var(key);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data.default_region, "North-West Region");
        assert_eq!(config.data.default_product, "Ream of Paper");
    }

    #[test]
    fn test_from_env_invalid_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        env::remove_var("PORT");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        let addr = config.bind_addr().unwrap();
        assert_eq!(addr.port(), 8050);
        assert!(addr.ip().is_unspecified());
    }
}
