use anyhow::{bail, Context, Result};
use std::env;

use super::cosmic::CosmicConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// A production deployment must be able to save progress entries.
    /// Elsewhere a read-only bucket is allowed.
    pub fn check_cosmic(&self, cosmic: &CosmicConfig) -> Result<()> {
        if self.is_production() && !cosmic.has_write_key() {
            bail!("COSMIC_WRITE_KEY must be set when ENVIRONMENT=production");
        }
        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "production".to_string(),
            log_level: "debug".to_string(),
        };

        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert!(config.is_production());
    }

    #[test]
    fn test_production_requires_write_key() {
        let mut config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "production".to_string(),
            log_level: "info".to_string(),
        };
        let read_only = CosmicConfig::new("bucket", "read", "");
        let writable = CosmicConfig::new("bucket", "read", "write");

        assert!(config.check_cosmic(&read_only).is_err());
        assert!(config.check_cosmic(&writable).is_ok());

        config.environment = "development".to_string();
        assert!(config.check_cosmic(&read_only).is_ok());
    }
}
