//! Environment configuration

use std::env;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub totals_cache_capacity: u64,
    pub totals_cache_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            totals_cache_capacity: parse_var("TOTALS_CACHE_CAPACITY", 1000)?,
            totals_cache_ttl: Duration::from_secs(parse_var("TOTALS_CACHE_TTL_SECS", 600)?),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Configuration("PORT must be greater than 0".to_string()));
        }
        if self.database_max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }
        if self.totals_cache_capacity == 0 {
            return Err(AppError::Configuration(
                "TOTALS_CACHE_CAPACITY must be greater than 0".to_string(),
            ));
        }
        if self.totals_cache_ttl.is_zero() {
            return Err(AppError::Configuration(
                "TOTALS_CACHE_TTL_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}
