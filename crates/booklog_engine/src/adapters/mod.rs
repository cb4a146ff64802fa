pub mod memory;

pub use memory::{MemoryBookLookup, MemoryHistoryStore};
