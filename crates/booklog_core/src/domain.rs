//! crates/booklog_core/src/domain.rs
//!
//! Defines the pure, core data structures for the history engine.
//! These structs are independent of any database or UI framework.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One "book opened" event.
///
/// Records are immutable once persisted. Corrections are modeled by
/// inserting a new record or deleting an old one, never by mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unset until the durable store assigns an identity on append.
    pub id: Option<Uuid>,
    pub book_id: Uuid,
    /// Reader position reference, if the event carried one.
    pub page_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

/// A book as resolved from the library. Referenced, never owned: the engine
/// treats it as read-only metadata keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub progress: f32,
    pub cover_image: Option<String>,
}

/// A history record joined with its resolved book.
///
/// Exists only inside the aggregation pipeline and the published snapshot,
/// never in the durable store.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub record: HistoryRecord,
    pub book: Book,
}

/// One recency bucket of the grouped view.
///
/// The label is `"today"`, `"yesterday"`, or a `dd.MM.yy` date; entries are
/// ordered newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedHistory {
    pub label: String,
    pub entries: Vec<HistoryEntry>,
}
