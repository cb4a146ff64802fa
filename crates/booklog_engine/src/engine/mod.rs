pub mod delete_task;
pub mod events;
pub mod handler;
pub mod load_task;
pub mod registry;
pub mod state;

// Re-export the engine surface so embedders can reach everything through
// the crate root.
pub use delete_task::UndoOutcome;
pub use events::HistoryEvent;
pub use handler::HistoryEngine;
pub use registry::{TaskRegistry, TaskTag};
pub use state::{HistoryState, ScrollPosition, StateStore};
