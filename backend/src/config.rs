//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `WORKERS` | `3` (tokio worker threads) |
//! | `REQUEST_TIMEOUT_SECS` | `120` |
//! | `MAX_TRAJECTORIES` | `20000` |
//! | `MAX_START_LIMIT` | `12327829503` (also the largest accepted value) |
//! | `JOB_RETENTION_SECS` | `3600` |
//!
//! A variable that is set but does not parse is an error; it is never
//! silently replaced by the default.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::models::{ParamLimits, MAX_SAFE_START};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKERS: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_JOB_RETENTION_SECS: u64 = 3600;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid bind address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub request_timeout: Duration,
    pub limits: ParamLimits,
    pub job_retention: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            limits: ParamLimits::default(),
            job_retention: Duration::from_secs(DEFAULT_JOB_RETENTION_SECS),
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn positive<T: PartialOrd + Default>(
    name: &'static str,
    value: T,
    raw: impl ToString,
) -> Result<T, ConfigError> {
    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
            reason: "must be greater than zero".to_string(),
        })
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns the raw value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;

        let workers = parse_var(&lookup, "WORKERS", defaults.workers)?;
        let workers = positive("WORKERS", workers, workers)?;

        let timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let timeout_secs = positive("REQUEST_TIMEOUT_SECS", timeout_secs, timeout_secs)?;

        let max_trajectories =
            parse_var(&lookup, "MAX_TRAJECTORIES", defaults.limits.max_trajectories)?;
        let max_trajectories = positive("MAX_TRAJECTORIES", max_trajectories, max_trajectories)?;

        let max_start_limit =
            parse_var(&lookup, "MAX_START_LIMIT", defaults.limits.max_start_limit)?;
        let max_start_limit = positive("MAX_START_LIMIT", max_start_limit, max_start_limit)?;
        if max_start_limit > MAX_SAFE_START {
            return Err(ConfigError::InvalidValue {
                name: "MAX_START_LIMIT",
                value: max_start_limit.to_string(),
                reason: format!("orbits overflow past {}", MAX_SAFE_START),
            });
        }

        let retention_secs = parse_var(&lookup, "JOB_RETENTION_SECS", DEFAULT_JOB_RETENTION_SECS)?;

        Ok(Self {
            host,
            port,
            workers,
            request_timeout: Duration::from_secs(timeout_secs),
            limits: ParamLimits {
                max_trajectories,
                max_start_limit,
            },
            job_retention: Duration::from_secs(retention_secs),
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr))
    }
}
