//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;

use anyhow::Context;

/// Gateway configuration parameters.
///
/// `REDIS_URL` is required; the remaining values have sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Connection string for the external cache service
    pub redis_url: String,
    /// Default TTL in seconds for entries stored without an explicit TTL
    pub default_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `REDIS_URL` - Cache service connection string (required)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 60)
    ///
    /// # Errors
    /// Returns an error if `REDIS_URL` is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            redis_url: env::var("REDIS_URL").context("REDIS_URL must be set")?,
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            default_ttl: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.default_ttl, 60);
    }

    #[test]
    fn test_config_from_env() {
        // Single test covering both branches to avoid parallel env races
        env::remove_var("PORT");
        env::remove_var("DEFAULT_TTL");
        env::remove_var("REDIS_URL");

        assert!(Config::from_env().is_err());

        env::set_var("REDIS_URL", "redis://cache.internal:6379");
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.redis_url, "redis://cache.internal:6379");
        assert_eq!(config.default_ttl, 60);

        env::remove_var("REDIS_URL");
    }
}
