//! crates/booklog_engine/src/engine/delete_task.rs
//!
//! The asynchronous worker for one delete/undo workflow instance.

use booklog_core::domain::HistoryRecord;
use booklog_core::ports::{NotificationOutcome, PortResult};
use tracing::info;

use crate::engine::handler::HistoryEngine;
use crate::engine::registry::TaskTag;

/// How a delete/undo workflow instance ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The undo window elapsed, or the notification was pre-empted, and the
    /// deletion is permanent.
    Committed,
    /// The user restored the entry before the window closed.
    Restored,
}

/// Runs one delete/undo workflow to a terminal state.
///
/// The record is removed up front, then a dismissal timer races the user's
/// undo. Each invocation is an independent instance: a newer delete takes
/// over the dismissal timer tag and pre-empts the notification slot, but it
/// can never restore or un-commit this one.
pub async fn delete_undo_process(
    engine: HistoryEngine,
    record: HistoryRecord,
) -> PortResult<UndoOutcome> {
    engine.history.delete(std::slice::from_ref(&record)).await?;
    engine.request_refresh();

    // Claim the notification slot before showing ours.
    engine.notifier.dismiss().await;

    let timer_engine = engine.clone();
    let timer_token = engine.registry.schedule(TaskTag::UndoTimer, move |token| async move {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(timer_engine.config.undo_window) => {}
        }
        timer_engine.notifier.dismiss().await;
    });

    let outcome = engine
        .notifier
        .show("History element deleted", "Undo")
        .await?;

    match outcome {
        NotificationOutcome::Dismissed => Ok(UndoOutcome::Committed),
        NotificationOutcome::ActionPerformed => {
            // Cancel this instance's timer specifically. The tag may
            // already belong to a newer delete's timer.
            timer_token.cancel();

            // Re-created rather than restored: the store assigns a fresh
            // identity on append.
            let restored = HistoryRecord { id: None, ..record };
            engine.history.append(restored).await?;
            engine.request_refresh();
            info!("deleted history element restored");
            Ok(UndoOutcome::Restored)
        }
    }
}
