//! crates/booklog_engine/src/config.rs
//!
//! Defines the engine's tunable timings and their loading logic.
//!
//! Every value has a canonical default; environment variables override them
//! at startup. The `.env` file is used for local development.

use std::time::Duration;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds the engine timings, loaded once at startup.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// How long a search edit must rest before the view re-aggregates.
    pub search_debounce: Duration,
    /// Grace window during which a deleted entry can still be restored.
    pub undo_window: Duration,
    /// Minimum time the refreshing indicator stays visible.
    pub refresh_min_visible: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(500),
            undo_window: Duration::from_secs(10),
            refresh_min_visible: Duration::from_millis(500),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// A `.env` file in the current directory is honored for development,
    /// but skipped in test environments to keep tests hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let defaults = Self::default();
        Ok(Self {
            search_debounce: millis_var("BOOKLOG_SEARCH_DEBOUNCE_MS", defaults.search_debounce)?,
            undo_window: millis_var("BOOKLOG_UNDO_WINDOW_MS", defaults.undo_window)?,
            refresh_min_visible: millis_var(
                "BOOKLOG_REFRESH_MIN_VISIBLE_MS",
                defaults.refresh_min_visible,
            )?,
        })
    }
}

fn millis_var(name: &str, fallback: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(fallback),
    }
}
