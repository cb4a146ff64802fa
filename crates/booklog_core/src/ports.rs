//! crates/booklog_core/src/ports.rs
//!
//! Defines the service contracts (traits) the engine consumes.
//! These traits form the boundary of the hexagonal architecture, keeping the
//! core independent of the concrete persistence, notification, and navigation
//! facilities of the surrounding application.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Book, HistoryRecord};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of external services.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable, append-only store of history records.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persists a record and returns the identity the store assigned to it.
    async fn append(&self, record: HistoryRecord) -> PortResult<Uuid>;

    /// Removes the given records. Records the store does not hold are
    /// ignored.
    async fn delete(&self, records: &[HistoryRecord]) -> PortResult<()>;

    /// Removes every record.
    async fn clear(&self) -> PortResult<()>;

    /// Reads the full current contents.
    async fn read_all(&self) -> PortResult<Vec<HistoryRecord>>;
}

/// Resolves book identifiers to their current metadata.
#[async_trait]
pub trait BookLookup: Send + Sync {
    /// Resolves the given ids. Ids that no longer exist are simply omitted
    /// from the result.
    async fn resolve_many(&self, ids: &[Uuid]) -> PortResult<Vec<Book>>;
}

/// How the user answered a notification before it went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    Dismissed,
    ActionPerformed,
}

/// A dismissible message surface with a single action affordance.
#[async_trait]
pub trait NotificationSurface: Send + Sync {
    /// Shows a message and resolves once the user acted on it or it went
    /// away. A later `show` or an explicit [`dismiss`](Self::dismiss)
    /// pre-empts a pending one, resolving it as `Dismissed`.
    async fn show(&self, message: &str, action_label: &str) -> PortResult<NotificationOutcome>;

    /// Dismisses the currently shown notification, if any.
    async fn dismiss(&self);
}

/// Routing facility. Opaque to the engine: it is told where to go and does
/// not care how that is realized.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Takes the user to the reader for the given book.
    async fn to_reader(&self, book: Book) -> PortResult<()>;
}
