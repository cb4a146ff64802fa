//! crates/booklog_engine/src/engine/state.rs
//!
//! Defines the published snapshot and the store that serializes mutations
//! to it.

use booklog_core::domain::GroupedHistory;
use tokio::sync::watch;

/// List position of the history view, reset to the top on load and refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    pub index: usize,
    pub offset: usize,
}

/// One immutable snapshot of everything the history screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub history: Vec<GroupedHistory>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub search_query: String,
    pub show_search: bool,
    pub has_focused: bool,
    pub show_delete_whole_history_dialog: bool,
    pub scroll: ScrollPosition,
}

/// Single source of truth for [`HistoryState`].
///
/// Every mutation goes through [`update`](Self::update), which applies the
/// snapshot transform atomically and publishes the result to all observers
/// in application order. Concurrent commands serialize here even though the
/// async work computing their payloads runs concurrently; an observer never
/// sees an older snapshot after a newer one.
#[derive(Clone, Debug)]
pub struct StateStore {
    tx: watch::Sender<HistoryState>,
}

impl StateStore {
    pub fn new(initial: HistoryState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Applies a snapshot transform and publishes the resulting snapshot.
    pub fn update(&self, transform: impl FnOnce(&mut HistoryState)) {
        self.tx.send_modify(transform);
    }

    /// Clones the latest snapshot.
    pub fn current(&self) -> HistoryState {
        self.tx.borrow().clone()
    }

    /// Subscribes to snapshot updates. The receiver always resolves to the
    /// latest snapshot, never a stale intermediate one.
    pub fn subscribe(&self) -> watch::Receiver<HistoryState> {
        self.tx.subscribe()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(HistoryState::default())
    }
}
