use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    /// Default filter directive when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse::<u32>().map_err(|_| {
                ConfigError::InvalidEnvVar("DATABASE_MAX_CONNECTIONS".to_string(), value)
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_max_connections,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
