//! crates/booklog_engine/src/engine/registry.rs
//!
//! Latest-wins registry for the engine's cancellable background tasks.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Purpose tag under which a background operation is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskTag {
    Search,
    Refresh,
    UndoTimer,
}

struct RegisteredTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Tracks at most one active operation per [`TaskTag`].
///
/// Scheduling under a tag cancels whatever operation previously held it;
/// distinct tags never affect each other. Cancellation is cooperative: the
/// operation receives a [`CancellationToken`] and must observe it at its
/// suspension points, before producing further side effects.
pub struct TaskRegistry {
    tasks: Mutex<HashMap<TaskTag, RegisteredTask>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Cancels the operation currently registered under `tag`, then spawns
    /// `work` in its place.
    ///
    /// Returns the token handed to the new operation, so a caller can later
    /// cancel exactly this operation even after the tag has been handed on
    /// to a newer one.
    pub fn schedule<F, Fut>(&self, tag: TaskTag, work: F) -> CancellationToken
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let task = RegisteredTask {
            token: token.clone(),
            handle: tokio::spawn(work(token.clone())),
        };
        // The lock is never held across an await, so the swap is atomic
        // from every scheduler's point of view.
        let previous = self.tasks.lock().insert(tag, task);
        if let Some(previous) = previous {
            previous.token.cancel();
        }
        token
    }

    /// Cancels the operation registered under `tag`, if any.
    pub fn cancel(&self, tag: TaskTag) {
        if let Some(task) = self.tasks.lock().remove(&tag) {
            task.token.cancel();
        }
    }

    /// Cancels everything and aborts the draining tasks.
    pub fn shutdown(&self) {
        for (_, task) in self.tasks.lock().drain() {
            task.token.cancel();
            task.handle.abort();
        }
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskRegistry {
    fn drop(&mut self) {
        self.shutdown();
    }
}
