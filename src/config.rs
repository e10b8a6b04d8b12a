//! # Configuration
//!
//! Runtime configuration read once at startup from environment variables and
//! passed explicitly to the components that need it.
//!
//! ## Environment Variables
//!
//! - `AH_FLOORS_HTTP_LISTEN_ADDRESS` - Bind address (default `localhost:8000`)
//! - `AH_FLOORS_SERVER_READ_TIMEOUT` - Seconds to receive a request body (default 5)
//! - `AH_FLOORS_SERVER_WRITE_TIMEOUT` - Seconds to produce a response (default 5)
//! - `AH_FLOORS_DATABASE_URL` / `AH_FLOORS_DATABASE_URL_FILE` - PostgreSQL connection string
//! - `AH_FLOORS_DATABASE_MAX_CONNECTIONS` - Pool size (default 10)
//! - `AH_FLOORS_LOG_LEVEL` - Log filter directive (default `info`)
//! - `AH_FLOORS_LOG_FORMAT` - `json` or `pretty` (default `json`)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::utils::constant::*;
use crate::utils::secret::get_secret;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },

    #[error("failed to read secret file named by {name}")]
    SecretFile {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_address: String,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            read_timeout: DEFAULT_READ_TIMEOUT,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `floormatch=debug,sqlx=warn`.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Bunyan-style JSON lines.
    Json,
    /// Human readable output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(()),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its
    /// value. Unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig {
            listen_address: lookup("AH_FLOORS_HTTP_LISTEN_ADDRESS")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string()),
            read_timeout: parse_or(
                &lookup,
                "AH_FLOORS_SERVER_READ_TIMEOUT",
                DEFAULT_READ_TIMEOUT.as_secs(),
            )
            .map(Duration::from_secs)?,
            write_timeout: parse_or(
                &lookup,
                "AH_FLOORS_SERVER_WRITE_TIMEOUT",
                DEFAULT_WRITE_TIMEOUT.as_secs(),
            )
            .map(Duration::from_secs)?,
        };

        let database = DatabaseConfig {
            url: get_secret(&lookup, "AH_FLOORS_DATABASE_URL_FILE", "AH_FLOORS_DATABASE_URL")?
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(
                &lookup,
                "AH_FLOORS_DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        let log = LogConfig {
            level: lookup("AH_FLOORS_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
                .to_ascii_lowercase(),
            format: parse_or(&lookup, "AH_FLOORS_LOG_FORMAT", LogFormat::Json)?,
        };

        Ok(Self {
            server,
            database,
            log,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
