//! crates/booklog_core/src/aggregate.rs
//!
//! The pure aggregation pipeline: raw history records plus resolved books
//! plus a search query become the grouped, deduplicated view the UI renders.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Book, GroupedHistory, HistoryEntry, HistoryRecord};

/// Builds the grouped history view.
///
/// Deterministic, no I/O, inputs untouched. The pipeline:
/// 1. drop records whose book no longer resolves,
/// 2. keep records whose book title contains `query` (case-folded and
///    trimmed on both sides; an empty query matches everything),
/// 3. keep only the newest record per book, globally, so a book lands in
///    at most one bucket system-wide,
/// 4. bucket the survivors by calendar day relative to `now`,
/// 5. emit buckets in the order produced by grouping the
///    timestamp-descending sequence.
///
/// An empty result is a valid view, not an error.
pub fn aggregate(
    records: &[HistoryRecord],
    books: &HashMap<Uuid, Book>,
    query: &str,
    now: DateTime<Utc>,
) -> Vec<GroupedHistory> {
    let needle = query.trim().to_lowercase();

    let mut entries: Vec<HistoryEntry> = records
        .iter()
        .filter_map(|record| {
            books.get(&record.book_id).map(|book| HistoryEntry {
                record: record.clone(),
                book: book.clone(),
            })
        })
        .filter(|entry| entry.book.title.to_lowercase().trim().contains(&needle))
        .collect();

    // Newest first. Equal timestamps fall back to the record id so the
    // dedup pass below picks the same winner on every run.
    entries.sort_by(|a, b| {
        b.record
            .timestamp
            .cmp(&a.record.timestamp)
            .then_with(|| id_rank(&a.record).cmp(&id_rank(&b.record)))
    });

    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.record.book_id));

    // Descending timestamps make same-day entries contiguous, so grouping
    // is a single pass comparing against the last bucket.
    let mut grouped: Vec<GroupedHistory> = Vec::new();
    for entry in entries {
        let label = bucket_label(entry.record.timestamp, now);
        match grouped.last_mut() {
            Some(bucket) if bucket.label == label => bucket.entries.push(entry),
            _ => grouped.push(GroupedHistory {
                label,
                entries: vec![entry],
            }),
        }
    }
    grouped
}

/// Recency label for a timestamp: `"today"`, `"yesterday"`, or the calendar
/// date formatted as `dd.MM.yy`.
pub fn bucket_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let day = timestamp.date_naive();
    let today = now.date_naive();
    if day == today {
        "today".to_string()
    } else if today.pred_opt() == Some(day) {
        "yesterday".to_string()
    } else {
        timestamp.format("%d.%m.%y").to_string()
    }
}

// Tie-break key for equal timestamps: persisted records outrank unpersisted
// ones, and among persisted records the smaller id wins.
fn id_rank(record: &HistoryRecord) -> (bool, Uuid) {
    (record.id.is_none(), record.id.unwrap_or_else(Uuid::nil))
}
