//! Engine configuration.
//!
//! The only tunable is the query debounce interval. It can come from the
//! `CATALOG_DEBOUNCE_MS` environment variable; a missing or malformed value
//! falls back to the 250 ms default.

use std::env;
use std::time::Duration;

use tracing::{info, warn};

/// Delay between the last query edit and its application to filtering
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Environment variable overriding the debounce interval, in milliseconds
pub const DEBOUNCE_ENV: &str = "CATALOG_DEBOUNCE_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub debounce: Duration,
}

impl EngineConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            debounce: parse_millis(DEBOUNCE_ENV, env::var(DEBOUNCE_ENV).ok(), DEFAULT_DEBOUNCE),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

fn parse_millis(key: &str, value: Option<String>, default: Duration) -> Duration {
    let Some(value) = value else {
        info!("{key} not set, using default: {}ms", default.as_millis());
        return default;
    };
    match value.trim().parse::<u64>() {
        Ok(millis) => Duration::from_millis(millis),
        Err(e) => {
            warn!("Invalid {key} value {value:?}: {e}, using default");
            default
        }
    }
}
