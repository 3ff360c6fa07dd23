//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve the remote API base URL and logging knobs from env vars.
//! - Fall back to development defaults with a logged notice, never a panic.

use std::env;

use log::info;

use crate::logging::default_log_level;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Resolved runtime configuration for the core crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfieConfig {
    /// Base URL of the remote book-tracking API.
    pub api_base_url: String,
    /// Log level passed to [`crate::logging::init_logging`].
    pub log_level: String,
    /// Optional absolute log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<String>,
}

impl ShelfieConfig {
    /// Loads configuration from the environment.
    pub fn load() -> Self {
        Self {
            api_base_url: var_or("SHELFIE_API_URL", DEFAULT_API_BASE_URL),
            log_level: var_or("SHELFIE_LOG_LEVEL", default_log_level()),
            log_dir: env::var("SHELFIE_LOG_DIR").ok().filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for ShelfieConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}
