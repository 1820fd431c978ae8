// ABOUTME: Environment-based configuration with typed defaults
// ABOUTME: API base URL, favorites path, HTTP timeouts, log level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use anyhow::{Context, Result};
use savora_mealdb::provider::DEFAULT_BASE_URL;
use std::env;
use std::path::PathBuf;

/// Default request timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds.
const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, resolved from the environment with CLI overrides
/// applied afterwards by the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Recipe API base URL (`SAVORA_API_BASE_URL`)
    pub api_base_url: String,
    /// Favorites file override (`SAVORA_FAVORITES_PATH`); platform default
    /// when absent
    pub favorites_path: Option<PathBuf>,
    /// HTTP request timeout in seconds (`SAVORA_HTTP_TIMEOUT_SECS`)
    pub http_timeout_secs: u64,
    /// HTTP connect timeout in seconds (`SAVORA_HTTP_CONNECT_TIMEOUT_SECS`)
    pub http_connect_timeout_secs: u64,
    /// Log filter directive (`SAVORA_LOG_LEVEL`), e.g. "info" or "savora=debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_owned(),
            favorites_path: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            http_connect_timeout_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable is set but unparsable.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            api_base_url: env::var("SAVORA_API_BASE_URL").unwrap_or(defaults.api_base_url),
            favorites_path: env::var_os("SAVORA_FAVORITES_PATH").map(PathBuf::from),
            http_timeout_secs: parse_secs("SAVORA_HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            http_connect_timeout_secs: parse_secs(
                "SAVORA_HTTP_CONNECT_TIMEOUT_SECS",
                defaults.http_connect_timeout_secs,
            )?,
            log_level: env::var("SAVORA_LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_secs(var: &str, default: u64) -> Result<u64> {
    match env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{var} must be a number of seconds, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
