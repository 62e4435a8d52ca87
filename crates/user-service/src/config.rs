//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DB_HOST` - `PostgreSQL` host
//! - `DB_USER` - `PostgreSQL` user
//! - `DB_PASSWORD` - `PostgreSQL` password
//! - `DB_NAME` - `PostgreSQL` database name
//!
//! ## Optional
//! - `HTTP_HOST` - Bind address (default: 0.0.0.0)
//! - `HTTP_PORT` - Listen port (default: 8080)
//! - `DB_PORT` - `PostgreSQL` port (default: 5432)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// IP address to bind the HTTP server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// `PostgreSQL` connection settings
    pub database: DatabaseConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// `PostgreSQL` connection settings.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub name: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or_default(&lookup, "HTTP_HOST", "0.0.0.0")?;
        let port = parse_or_default(&lookup, "HTTP_PORT", "8080")?;
        let database = DatabaseConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            database,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DatabaseConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: get_required(lookup, "DB_HOST")?,
            port: parse_or_default(lookup, "DB_PORT", "5432")?,
            user: get_required(lookup, "DB_USER")?,
            password: SecretString::from(get_required(lookup, "DB_PASSWORD")?),
            name: get_required(lookup, "DB_NAME")?,
            max_connections: parse_or_default(lookup, "DB_MAX_CONNECTIONS", "10")?,
        })
    }

    /// Connection options for the configured database.
    ///
    /// TLS is disabled; the database is expected on a private network.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required variable.
fn get_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Parse a variable, falling back to a default when unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
