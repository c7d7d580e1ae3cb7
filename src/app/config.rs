// src/app/config.rs
//
// Environment-driven configuration
//
// Every value except the OMDb API key has a default. Lookups go through a
// closure so tests never touch the process environment.

use log::info;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::integrations::omdb::DEFAULT_BASE_URL;
use crate::services::ConcurrencyPolicy;

pub const OMDB_API_KEY_ENV: &str = "OMDB_API_KEY";
pub const OMDB_BASE_URL_ENV: &str = "OMDB_BASE_URL";
pub const OMDB_TIMEOUT_SECS_ENV: &str = "OMDB_TIMEOUT_SECS";
pub const DB_PATH_ENV: &str = "CINEFAV_DB_PATH";
pub const CONCURRENCY_POLICY_ENV: &str = "CINEFAV_CONCURRENCY_POLICY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub omdb_timeout: Duration,
    /// `None` selects the per-user data directory
    pub db_path: Option<PathBuf>,
    pub concurrency_policy: ConcurrencyPolicy,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    pub fn from_source<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let omdb_api_key = var(OMDB_API_KEY_ENV)
            .ok_or_else(|| AppError::Config(format!("{} is not set", OMDB_API_KEY_ENV)))?;

        let omdb_base_url = var(OMDB_BASE_URL_ENV).unwrap_or_else(|| {
            info!("{} not set, using default: {}", OMDB_BASE_URL_ENV, DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_string()
        });

        let omdb_timeout = match var(OMDB_TIMEOUT_SECS_ENV) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    AppError::Config(format!("Invalid {} value {:?}: {}", OMDB_TIMEOUT_SECS_ENV, raw, e))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!(
                        "{} must be greater than zero",
                        OMDB_TIMEOUT_SECS_ENV
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let concurrency_policy = match var(CONCURRENCY_POLICY_ENV).as_deref() {
            None | Some("last_write_wins") => ConcurrencyPolicy::LastWriteWins,
            Some("revisioned") => ConcurrencyPolicy::Revisioned,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "Invalid {} value {:?}, expected last_write_wins or revisioned",
                    CONCURRENCY_POLICY_ENV, other
                )))
            }
        };

        Ok(Self {
            omdb_api_key,
            omdb_base_url,
            omdb_timeout,
            db_path: var(DB_PATH_ENV).map(PathBuf::from),
            concurrency_policy,
        })
    }
}
