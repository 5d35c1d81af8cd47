//! Runtime configuration.
//!
//! Defaults match the production endpoints. Each field can be overridden by
//! an environment variable:
//!
//! | Field | Env Var | Default |
//! |-------|---------|---------|
//! | `primary_url` | `QUOTEFETCH_PRIMARY_URL` | NYSE quotes API |
//! | `secondary_url` | `QUOTEFETCH_SECONDARY_URL` | Schwab fund fees page |
//! | `user_agent` | `QUOTEFETCH_USER_AGENT` | `Mozilla/5.0` |
//! | `timeout_ms` | `QUOTEFETCH_TIMEOUT_MS` | `10000` |
//! | `max_workers` | `QUOTEFETCH_MAX_WORKERS` | `10` |
//!
//! Source URLs are prefixes; the percent-encoded ticker is appended as is.

use std::env;

use tokio::sync::Semaphore;

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::ConfigError;

pub const NYSE_QUOTE_URL: &str = "https://www.nyse.com/api/nyseservice/v1/quotes?symbol=";
pub const SCHWAB_FEES_URL: &str =
    "https://www.schwab.wallst.com/Prospect/Research/mutualfunds/fees.asp?symbol=";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_MAX_WORKERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub primary_url: String,
    pub secondary_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub max_workers: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            primary_url: String::from(NYSE_QUOTE_URL),
            secondary_url: String::from(SCHWAB_FEES_URL),
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl FetchConfig {
    /// Builds the configuration from defaults plus process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from defaults plus whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("QUOTEFETCH_PRIMARY_URL") {
            config.primary_url = non_empty("QUOTEFETCH_PRIMARY_URL", value)?;
        }
        if let Some(value) = lookup("QUOTEFETCH_SECONDARY_URL") {
            config.secondary_url = non_empty("QUOTEFETCH_SECONDARY_URL", value)?;
        }
        if let Some(value) = lookup("QUOTEFETCH_USER_AGENT") {
            config.user_agent = non_empty("QUOTEFETCH_USER_AGENT", value)?;
        }
        if let Some(value) = lookup("QUOTEFETCH_TIMEOUT_MS") {
            config.timeout_ms = positive("QUOTEFETCH_TIMEOUT_MS", &value)?;
        }
        if let Some(value) = lookup("QUOTEFETCH_MAX_WORKERS") {
            config.max_workers = positive("QUOTEFETCH_MAX_WORKERS", &value)?;
            if config.max_workers > Semaphore::MAX_PERMITS {
                return Err(ConfigError::InvalidNumber {
                    var: "QUOTEFETCH_MAX_WORKERS",
                    value,
                });
            }
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue { var });
    }
    Ok(value)
}

fn positive<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_owned(),
        }),
    }
}
