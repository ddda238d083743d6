//! API server configuration.
//!
//! All configuration is loaded from environment variables; the server
//! runs in containers where env is the configuration surface.

use crate::server::ServerConfig;

/// Complete API server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// HTTP listener settings.
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `NAVLOG_HTTP_HOST` -- bind address (default `0.0.0.0`)
    /// - `NAVLOG_HTTP_PORT` -- listen port (default `8080`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|e| ConfigError(format!("missing required env var DATABASE_URL: {e}")))?;

        let host = std::env::var("NAVLOG_HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());

        let port: u16 = std::env::var("NAVLOG_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_owned())
            .parse()
            .map_err(|e| ConfigError(format!("invalid NAVLOG_HTTP_PORT: {e}")))?;

        Ok(Self {
            database_url,
            server: ServerConfig { host, port },
        })
    }
}

/// A configuration variable was missing or invalid.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);
