//! Environment configuration read at startup.

use thiserror::Error;

/// A required environment variable is missing or unparseable.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(String);

/// Process configuration, read once at startup. The secret and connection
/// descriptor are opaque external inputs.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string for the record store.
    pub database_url: String,
    /// Shared secret for bearer credential verification.
    pub jwt_secret: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment, failing fast when a
    /// required variable is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` or `JWT_SECRET` is unset,
    /// or if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError("DATABASE_URL must be set".into()))?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError("JWT_SECRET must be set".into()))?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError(format!("PORT must be a valid u16: {e}")))?;

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
        })
    }
}
