//! crates/booklog_engine/src/adapters/memory.rs
//!
//! In-memory implementations of the store and lookup ports. They back the
//! integration tests and serve as the reference shape for real adapters.

use async_trait::async_trait;
use booklog_core::domain::{Book, HistoryRecord};
use booklog_core::ports::{BookLookup, HistoryStore, PortResult};
use tokio::sync::Mutex;
use uuid::Uuid;

/// A history store holding its records in memory.
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, mut record: HistoryRecord) -> PortResult<Uuid> {
        let id = record.id.unwrap_or_else(Uuid::new_v4);
        record.id = Some(id);
        self.records.lock().await.push(record);
        Ok(id)
    }

    async fn delete(&self, records: &[HistoryRecord]) -> PortResult<()> {
        let mut held = self.records.lock().await;
        held.retain(|candidate| {
            !records.iter().any(|target| match (target.id, candidate.id) {
                (Some(a), Some(b)) => a == b,
                // Unpersisted targets fall back to matching on content.
                _ => target.book_id == candidate.book_id && target.timestamp == candidate.timestamp,
            })
        });
        Ok(())
    }

    async fn clear(&self) -> PortResult<()> {
        self.records.lock().await.clear();
        Ok(())
    }

    async fn read_all(&self) -> PortResult<Vec<HistoryRecord>> {
        Ok(self.records.lock().await.clone())
    }
}

/// A book lookup over an in-memory shelf.
pub struct MemoryBookLookup {
    books: Mutex<Vec<Book>>,
}

impl MemoryBookLookup {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// Adds a book, or replaces it if the id is already shelved.
    pub async fn upsert(&self, book: Book) {
        let mut books = self.books.lock().await;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => *slot = book,
            None => books.push(book),
        }
    }

    /// Drops a book, simulating a deletion in the surrounding library.
    pub async fn remove(&self, id: Uuid) {
        self.books.lock().await.retain(|b| b.id != id);
    }
}

#[async_trait]
impl BookLookup for MemoryBookLookup {
    async fn resolve_many(&self, ids: &[Uuid]) -> PortResult<Vec<Book>> {
        let books = self.books.lock().await;
        Ok(books
            .iter()
            .filter(|b| ids.contains(&b.id))
            .cloned()
            .collect())
    }
}
