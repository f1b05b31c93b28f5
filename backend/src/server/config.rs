//! Application configuration parsing and validation.
//!
//! Centralises the environment-driven settings so they are validated
//! consistently and can be tested in isolation with a mock environment.

use mockable::Env;
use std::net::SocketAddr;

const BIND_ADDR_ENV: &str = "BIND_ADDR";
const DATABASE_URL_ENV: &str = "DATABASE_URL";
const POOL_MAX_SIZE_ENV: &str = "DB_POOL_MAX_SIZE";

const BIND_ADDR_DEFAULT: &str = "0.0.0.0:8080";
const POOL_MAX_SIZE_DEFAULT: u32 = 10;

/// Errors raised while validating application configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Application settings derived from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum connections in the database pool.
    pub pool_max_size: u32,
}

impl AppConfig {
    /// Build application settings from environment variables.
    ///
    /// Missing variables fall back to defaults (`BIND_ADDR=0.0.0.0:8080`,
    /// `DB_POOL_MAX_SIZE=10`, no database); present-but-invalid values fail
    /// startup with a [`ConfigError`].
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr_from_env(env)?;
        let database_url = env.string(DATABASE_URL_ENV).filter(|url| !url.is_empty());
        let pool_max_size = pool_max_size_from_env(env)?;

        Ok(Self {
            bind_addr,
            database_url,
            pool_max_size,
        })
    }
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    let raw = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| BIND_ADDR_DEFAULT.to_string());
    raw.parse().map_err(|_| ConfigError::InvalidEnv {
        name: BIND_ADDR_ENV,
        value: raw,
        expected: "host:port socket address",
    })
}

fn pool_max_size_from_env<E: Env>(env: &E) -> Result<u32, ConfigError> {
    match env.string(POOL_MAX_SIZE_ENV) {
        None => Ok(POOL_MAX_SIZE_DEFAULT),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or(ConfigError::InvalidEnv {
                name: POOL_MAX_SIZE_ENV,
                value: raw,
                expected: "positive integer",
            }),
    }
}
