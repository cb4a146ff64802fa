//! crates/booklog_engine/src/engine/events.rs
//!
//! Defines the commands the surrounding application sends to the engine.
//! Every command is applied through the engine's `on_event` dispatcher.

use booklog_core::domain::{Book, HistoryRecord};

use crate::engine::state::ScrollPosition;

/// UI-originated commands.
#[derive(Debug, Clone)]
pub enum HistoryEvent {
    /// Loads the list from the durable store, showing the loading state.
    OnLoadList,

    /// Reloads the list, holding the pull-to-refresh indicator visible for
    /// at least the configured minimum duration.
    OnRefreshList,

    /// Stores the new query immediately and re-aggregates after the
    /// debounce delay. Edits inside the delay window supersede each other.
    OnSearchQueryChange(String),

    /// Toggles the search field. Hiding it clears the query and
    /// re-aggregates right away, without debounce.
    OnSearchShowHide,

    /// Marks the search field as having grabbed focus once, so it is not
    /// re-focused on every redraw.
    OnRequestFocus,

    /// Soft-deletes one entry and opens its undo window.
    OnDeleteHistoryElement(HistoryRecord),

    /// Shows or hides the "delete whole history?" confirmation dialog.
    OnShowHideDeleteWholeHistoryDialog,

    /// Clears the durable store. Only honored while the confirmation
    /// dialog is showing.
    OnDeleteWholeHistory,

    /// Replaces a book's metadata in-place in the current snapshot, without
    /// re-aggregating from the store.
    OnUpdateBook(Book),

    /// Records a fresh "book opened" event, then delegates navigation.
    OnNavigateToReaderScreen(Book),

    /// The UI reports the current list position.
    OnScrolled(ScrollPosition),
}
