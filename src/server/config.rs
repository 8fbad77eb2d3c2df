use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
/// Every 5 minutes, at second 0
const DEFAULT_CLEANUP_SCHEDULE: &str = "0 */5 * * * *";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub log_level: String,
    pub cleanup_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            cleanup_schedule: std::env::var("CLEANUP_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_CLEANUP_SCHEDULE.to_string()),
        };

        if config.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: config.bind_address,
            }
            .into());
        }

        Ok(config)
    }
}
