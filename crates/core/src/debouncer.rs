use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::DebounceError;

/// Coalesces bursts of triggers into a single delayed task.
///
/// Every [`trigger`](Self::trigger) replaces the pending task, so the task
/// only runs once no new trigger arrived for `delay`. Tasks read whatever
/// state they need when they fire, not when they were scheduled.
///
/// A running task may trigger or cancel the debouncer it runs on.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    gate: Arc<Gate>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

// Lock order: `pending` before `generation`, `running` before `generation`.
// `running` is never taken while `pending` is held.
#[derive(Debug, Default)]
struct Gate {
    // Generation of the only task allowed to run
    generation: Mutex<u64>,
    // Held for the whole run so that `cancel` waits for an evaluation in progress
    running: Mutex<()>,
    running_on: Mutex<Option<ThreadId>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Gate {
    fn advance(&self) -> u64 {
        let mut generation = lock(&self.generation);
        *generation = generation.wrapping_add(1);
        *generation
    }

    fn run_if_current<F: FnOnce()>(&self, generation: u64, task: F) {
        let _running = lock(&self.running);

        let current = *lock(&self.generation);
        if current != generation {
            trace!("Debouncer: generation {} superseded by {}", generation, current);
            return;
        }

        *lock(&self.running_on) = Some(thread::current().id());
        task();
        *lock(&self.running_on) = None;
    }

    fn wait_idle(&self) {
        // A task cancelling its own debouncer is already past the generation check
        if *lock(&self.running_on) == Some(thread::current().id()) {
            return;
        }
        drop(lock(&self.running));
    }
}

impl Debouncer {
    /// Creates a debouncer bound to the tokio runtime it is created in.
    ///
    /// # Errors
    ///
    /// Returns [`DebounceError::NoRuntime`] when called outside a tokio runtime.
    pub fn new(delay: Duration) -> Result<Self, DebounceError> {
        Ok(Self::with_handle(delay, Handle::try_current()?))
    }

    #[must_use]
    pub fn with_handle(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            runtime,
            gate: Arc::new(Gate::default()),
            pending: Mutex::new(None),
        }
    }

    /// Schedules `task` after the delay, dropping any task still waiting.
    pub fn trigger<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // Held until the handle is stored, so handles are replaced in generation order
        let mut pending = lock(&self.pending);
        let generation = self.gate.advance();
        let gate = Arc::clone(&self.gate);
        let delay = self.delay;

        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            gate.run_if_current(generation, task);
        });

        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drops the pending task without running it.
    ///
    /// Returns whether a task was still waiting. Once this returns, no task
    /// scheduled before the call will run, and none is still running unless
    /// the caller is that task.
    pub fn cancel(&self) -> bool {
        let previous = {
            let mut pending = lock(&self.pending);
            self.gate.advance();
            pending.take()
        };

        let was_pending = previous.is_some_and(|handle| {
            let was_pending = !handle.is_finished();
            handle.abort();
            was_pending
        });

        self.gate.wait_idle();
        was_pending
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        lock(&self.pending).as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
