//! crates/booklog_engine/src/lib.rs
//!
//! The reactive engine over the booklog history. UI commands flow into a
//! single snapshot store; long-running work (debounced search, refreshes,
//! undo timers) runs as cancellable background tasks that write back only
//! after checking they have not been superseded.

pub mod adapters;
pub mod config;
pub mod engine;
pub mod error;

pub use config::{ConfigError, EngineConfig};
pub use engine::{
    HistoryEngine, HistoryEvent, HistoryState, ScrollPosition, StateStore, TaskRegistry, TaskTag,
    UndoOutcome,
};
pub use error::EngineError;
