//! Configuration management for taskboard.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `CORS_ALLOWED_ORIGINS` - Optional. Comma-separated list of origins the
//!   frontend may call from. `*` allows any origin. Defaults to the local
//!   frontend dev servers (`http://localhost:5173,http://localhost:5175`).
//! - `ENABLE_CLEAR_ENDPOINT` - Optional. Whether `POST /api/tasks/clear` is
//!   registered. Defaults to `true`; the endpoint is a test/reset utility.
//! - `STATIC_DIR` - Optional. Directory holding the single-page client.
//!   Defaults to `static`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Origins allowed to make cross-origin requests. `*` means any.
    pub cors_allowed_origins: Vec<String>,

    /// Whether the bulk-clear endpoint is registered
    pub enable_clear_endpoint: bool,

    /// Directory the single-page client is served from
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:5175".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let enable_clear_endpoint = env_var_bool("ENABLE_CLEAR_ENDPOINT", true);

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            enable_clear_endpoint,
            static_dir,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors_allowed_origins: vec!["*".to_string()],
            enable_clear_endpoint: true,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Parse an environment variable as a boolean, returning `default` if unset.
///
/// Recognises `1`, `true`, `yes`, `y`, `on` (case-insensitive) as `true`;
/// any other set value maps to `false`.
fn env_var_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        ),
        Err(_) => default,
    }
}
