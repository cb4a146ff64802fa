//! crates/booklog_engine/src/error.rs
//!
//! Defines the primary error type for the engine crate.

use booklog_core::ports::PortError;

use crate::config::ConfigError;

/// The primary error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service
    /// ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),
}
