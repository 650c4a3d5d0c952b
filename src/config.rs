//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host
    pub db_host: String,

    /// Database port
    pub db_port: u16,

    /// Database user
    pub db_user: String,

    /// Database password
    pub db_password: String,

    /// Database name
    pub db_name: String,

    /// Database TLS mode (disable, prefer, require, ...)
    pub db_ssl_mode: PgSslMode,

    /// Maximum database connections in pool
    pub db_max_connections: u32,

    /// Shared secret for signing bearer tokens
    pub jwt_secret: String,

    /// Bearer token lifetime, from JWT_EXPIRATION_HOURS
    pub jwt_ttl: Duration,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_host = env_or("DB_HOST", "localhost");
        let db_port = parse_env("DB_PORT", "5432")?;
        let db_user = env_or("DB_USER", "postgres");
        let db_password = env_or("DB_PASSWORD", "");
        let db_name = env_or("DB_NAME", "postgres");

        let db_ssl_mode = PgSslMode::from_str(&env_or("DB_SSL_MODE", "disable"))
            .map_err(|_| ConfigError::InvalidValue("DB_SSL_MODE"))?;

        let db_max_connections = parse_env("DB_MAX_CONNECTIONS", "10")?;

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingEnv("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::InvalidValue("JWT_SECRET"));
        }

        let jwt_ttl = ttl_from_hours(parse_env("JWT_EXPIRATION_HOURS", "24")?)?;

        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", "8080")?;

        let environment = env_or("ENV", "development");

        Ok(Self {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            db_ssl_mode,
            db_max_connections,
            jwt_secret,
            jwt_ttl,
            host,
            port,
            environment,
        })
    }

    /// Connection options for the PostgreSQL pool
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(self.db_ssl_mode)
    }

    /// Bearer token lifetime
    pub fn jwt_ttl(&self) -> Duration {
        self.jwt_ttl
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if running in development (verbose store logging)
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Read an environment variable, treating unset and empty the same
fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Token lifetime in seconds must fit the signed claim timestamps
fn ttl_from_hours(hours: u64) -> Result<Duration, ConfigError> {
    hours
        .checked_mul(3600)
        .filter(|secs| i64::try_from(*secs).is_ok())
        .map(Duration::from_secs)
        .ok_or(ConfigError::InvalidValue("JWT_EXPIRATION_HOURS"))
}

fn parse_env<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    env_or(key, default)
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key))
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
