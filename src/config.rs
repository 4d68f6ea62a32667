//! Environment-driven settings.
//!
//! `BUNKER_DEBUG` turns on the HTTP debug report; the bare `debug=true`
//! variable is honoured as well. `BUNKER_HTTP_TIMEOUT_SECS` sets the default
//! request timeout.

use std::env;
use std::time::Duration;

pub const DEBUG_ENV: &str = "BUNKER_DEBUG";
pub const LEGACY_DEBUG_ENV: &str = "debug";
pub const TIMEOUT_ENV: &str = "BUNKER_HTTP_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            http_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let debug = env_flag(DEBUG_ENV) || env_flag(LEGACY_DEBUG_ENV);
        let http_timeout = match env::var(TIMEOUT_ENV) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid {}", TIMEOUT_ENV);
                    DEFAULT_TIMEOUT
                }
            },
            Err(_) => DEFAULT_TIMEOUT,
        };

        Self {
            debug,
            http_timeout,
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}
