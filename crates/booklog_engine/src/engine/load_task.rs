//! crates/booklog_engine/src/engine/load_task.rs
//!
//! The asynchronous worker that rebuilds the grouped view from the durable
//! store.

use std::collections::HashMap;

use booklog_core::aggregate::aggregate;
use booklog_core::domain::Book;
use booklog_core::ports::PortResult;
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::engine::handler::HistoryEngine;

/// Reads the store, resolves the referenced books, aggregates, and
/// publishes the result.
///
/// The token is checked before every snapshot write so a superseded reload
/// never clobbers the view a newer one published.
pub async fn load_history(
    engine: &HistoryEngine,
    query: &str,
    token: &CancellationToken,
) -> PortResult<()> {
    let records = engine.history.read_all().await?;

    if records.is_empty() {
        if !token.is_cancelled() {
            engine.state.update(|s| {
                s.history = Vec::new();
                s.is_loading = false;
            });
        }
        return Ok(());
    }

    let mut ids: Vec<Uuid> = records.iter().map(|r| r.book_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let resolved = engine.books.resolve_many(&ids).await?;
    let books: HashMap<Uuid, Book> = resolved.into_iter().map(|b| (b.id, b)).collect();

    let grouped = aggregate(&records, &books, query, Utc::now());

    if !token.is_cancelled() {
        engine.state.update(|s| {
            s.history = grouped;
            s.is_loading = false;
        });
    }
    Ok(())
}
