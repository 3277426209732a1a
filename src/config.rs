//! Client configuration: defaults, overridable from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `SHOP_ADMIN_API_URL` | `http://localhost:3000` |
//! | `SHOP_ADMIN_TIMEOUT_SECS` | `30` |
//! | `SHOP_ADMIN_TOKEN_FILE` | `.shop-admin/session.json` |

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "SHOP_ADMIN_API_URL";
pub const TIMEOUT_VAR: &str = "SHOP_ADMIN_TIMEOUT_SECS";
pub const TOKEN_FILE_VAR: &str = "SHOP_ADMIN_TOKEN_FILE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root of the REST API; `/api/v1/...` is appended.
    pub api_base_url: String,
    /// Per-request timeout of the HTTP transport.
    pub request_timeout: Duration,
    /// Where [`FileTokenStore`](crate::token_store::FileTokenStore) keeps the token.
    pub token_file: PathBuf,
    /// Inbox capacity of the session store actor.
    pub store_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(30),
            token_file: PathBuf::from(".shop-admin").join("session.json"),
            store_buffer: 32,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            if url.trim().is_empty() {
                return Err(ConfigError::Empty { var: API_URL_VAR });
            }
            config.api_base_url = url.trim().to_string();
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { var: TIMEOUT_VAR, value: value.clone() })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(path) = lookup(TOKEN_FILE_VAR) {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty { var: TOKEN_FILE_VAR });
            }
            config.token_file = PathBuf::from(path);
        }

        Ok(config)
    }
}
