//! crates/booklog_engine/src/engine/handler.rs
//!
//! The engine itself: owns the port handles, dispatches UI commands, and
//! spawns the background tasks that keep the snapshot consistent.

use std::sync::Arc;

use booklog_core::domain::HistoryRecord;
use booklog_core::ports::{BookLookup, HistoryStore, Navigator, NotificationSurface};
use chrono::Utc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::EngineConfig;
use crate::engine::delete_task::delete_undo_process;
use crate::engine::events::HistoryEvent;
use crate::engine::load_task::load_history;
use crate::engine::registry::{TaskRegistry, TaskTag};
use crate::engine::state::{HistoryState, ScrollPosition, StateStore};
use crate::error::EngineError;

/// The reactive history engine.
///
/// Cloning is cheap: all clones share the same state store, task registry,
/// and port handles, so a clone can be moved into a spawned task.
#[derive(Clone)]
pub struct HistoryEngine {
    pub(crate) history: Arc<dyn HistoryStore>,
    pub(crate) books: Arc<dyn BookLookup>,
    pub(crate) notifier: Arc<dyn NotificationSurface>,
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) config: Arc<EngineConfig>,
    pub(crate) state: StateStore,
    pub(crate) registry: Arc<TaskRegistry>,
}

impl HistoryEngine {
    pub fn new(
        history: Arc<dyn HistoryStore>,
        books: Arc<dyn BookLookup>,
        notifier: Arc<dyn NotificationSurface>,
        navigator: Arc<dyn Navigator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            history,
            books,
            notifier,
            navigator,
            config: Arc::new(config),
            state: StateStore::default(),
            registry: Arc::new(TaskRegistry::new()),
        }
    }

    /// Like [`new`](Self::new), with the configuration loaded from the
    /// environment.
    pub fn from_env(
        history: Arc<dyn HistoryStore>,
        books: Arc<dyn BookLookup>,
        notifier: Arc<dyn NotificationSurface>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(
            history,
            books,
            notifier,
            navigator,
            EngineConfig::from_env()?,
        ))
    }

    /// Clones the latest snapshot.
    pub fn state(&self) -> HistoryState {
        self.state.current()
    }

    /// Subscribes to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<HistoryState> {
        self.state.subscribe()
    }

    /// Cancels all in-flight background work.
    pub fn shutdown(&self) {
        self.registry.shutdown();
    }

    /// Applies one UI command.
    ///
    /// Dispatch itself is synchronous; anything that touches the durable
    /// store runs as a spawned task, so this must be called from within a
    /// Tokio runtime.
    pub fn on_event(&self, event: HistoryEvent) {
        match event {
            HistoryEvent::OnLoadList => {
                let engine = self.clone();
                tokio::spawn(async move {
                    engine.state.update(|s| {
                        s.is_loading = true;
                        s.show_search = false;
                        s.scroll = ScrollPosition::default();
                    });
                    engine.reload("", &CancellationToken::new()).await;
                });
            }

            HistoryEvent::OnRefreshList => {
                let engine = self.clone();
                self.registry.schedule(TaskTag::Refresh, move |token| async move {
                    engine.state.update(|s| {
                        s.is_refreshing = true;
                        s.show_search = false;
                        s.scroll = ScrollPosition::default();
                    });

                    engine.reload("", &token).await;

                    // Keep the indicator up long enough to register even
                    // when the reload finishes immediately.
                    tokio::select! {
                        _ = token.cancelled() => return,
                        _ = tokio::time::sleep(engine.config.refresh_min_visible) => {}
                    }
                    engine.state.update(|s| s.is_refreshing = false);
                });
            }

            HistoryEvent::OnSearchQueryChange(query) => {
                // The input field reflects the edit without delay; only the
                // aggregation is debounced.
                self.state.update(|s| s.search_query = query);
                let engine = self.clone();
                self.registry.schedule(TaskTag::Search, move |token| async move {
                    tokio::select! {
                        _ = token.cancelled() => return,
                        _ = tokio::time::sleep(engine.config.search_debounce) => {}
                    }
                    // Read the query as of now: the last edit inside the
                    // debounce window is the one that counts.
                    engine.reload(&engine.effective_query(), &token).await;
                });
            }

            HistoryEvent::OnSearchShowHide => {
                let engine = self.clone();
                tokio::spawn(async move {
                    let hiding = engine.state.current().show_search;
                    if hiding {
                        engine.state.update(|s| {
                            s.show_search = false;
                            s.search_query.clear();
                            s.has_focused = false;
                        });
                        engine.reload("", &CancellationToken::new()).await;
                    } else {
                        engine.state.update(|s| s.show_search = true);
                    }
                });
            }

            HistoryEvent::OnRequestFocus => {
                self.state.update(|s| {
                    if !s.has_focused {
                        s.has_focused = true;
                    }
                });
            }

            HistoryEvent::OnDeleteHistoryElement(record) => {
                let engine = self.clone();
                tokio::spawn(async move {
                    match delete_undo_process(engine, record).await {
                        Ok(outcome) => info!("delete workflow finished: {:?}", outcome),
                        Err(e) => error!("delete workflow failed: {:?}", e),
                    }
                });
            }

            HistoryEvent::OnShowHideDeleteWholeHistoryDialog => {
                self.state.update(|s| {
                    s.show_delete_whole_history_dialog = !s.show_delete_whole_history_dialog;
                });
            }

            HistoryEvent::OnDeleteWholeHistory => {
                if !self.state.current().show_delete_whole_history_dialog {
                    warn!("OnDeleteWholeHistory without prior confirmation, ignoring");
                    return;
                }
                let engine = self.clone();
                tokio::spawn(async move {
                    engine.state.update(|s| {
                        s.show_delete_whole_history_dialog = false;
                        s.is_loading = true;
                    });
                    if let Err(e) = engine.history.clear().await {
                        warn!("failed to clear history: {:?}", e);
                        engine.state.update(|s| s.is_loading = false);
                        return;
                    }
                    engine.reload("", &CancellationToken::new()).await;
                });
            }

            HistoryEvent::OnUpdateBook(book) => {
                self.state.update(|s| {
                    for bucket in &mut s.history {
                        for entry in &mut bucket.entries {
                            if entry.book.id == book.id {
                                entry.book = book.clone();
                            }
                        }
                    }
                });
            }

            HistoryEvent::OnNavigateToReaderScreen(book) => {
                let engine = self.clone();
                tokio::spawn(async move {
                    let record = HistoryRecord {
                        id: None,
                        book_id: book.id,
                        page_id: None,
                        timestamp: Utc::now(),
                    };
                    if let Err(e) = engine.history.append(record).await {
                        warn!("failed to record opened book: {:?}", e);
                    }
                    if let Err(e) = engine.navigator.to_reader(book).await {
                        error!("navigation to reader failed: {:?}", e);
                    }
                });
            }

            HistoryEvent::OnScrolled(position) => {
                self.state.update(|s| s.scroll = position);
            }
        }
    }

    /// The query the view is currently filtered by: the stored search query
    /// while the search field is shown, otherwise nothing.
    pub(crate) fn effective_query(&self) -> String {
        let state = self.state.current();
        if state.show_search {
            state.search_query
        } else {
            String::new()
        }
    }

    /// Reloads the grouped view, absorbing port failures: the previously
    /// published view stays as it was and only the loading flag is cleared,
    /// so the UI is never stuck spinning on a failed attempt.
    pub(crate) async fn reload(&self, query: &str, token: &CancellationToken) {
        if let Err(e) = load_history(self, query, token).await {
            warn!("history reload failed: {:?}", e);
            if !token.is_cancelled() {
                self.state.update(|s| s.is_loading = false);
            }
        }
    }

    /// Refreshes the list the way `OnRefreshList` does. The delete workflow
    /// uses this to reflect store changes around the undo window.
    pub(crate) fn request_refresh(&self) {
        self.on_event(HistoryEvent::OnRefreshList);
    }
}
