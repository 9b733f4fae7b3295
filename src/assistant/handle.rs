/*!
 * Assistant Handle
 *
 * Owns the worker thread and exposes the caller-side contract:
 * register, check whether the assistant sleeps, wake it up.
 */

use super::action::HelpAction;
use super::builder::AssistantBuilder;
use super::config::AssistantConfig;
use super::stats::AssistantStats;
use super::worker::{self, Shared};
use super::state::AssistantState;
use crate::core::errors::{AssistantError, AssistantResult};
use crate::core::types::{HelpRequest, StudentId};
use crate::queue::BoundedSlotQueue;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{error, info, trace};

/// A teaching assistant serving a bounded waiting room from one worker thread
///
/// Registering never wakes the assistant. Callers that want the student
/// served now check [`Assistant::sleeping`] and call [`Assistant::wake_up`]
/// (or use [`Assistant::register_and_wake`]).
///
/// # Examples
///
/// ```no_run
/// use teaching_assistant::{Assistant, TracingHelpAction};
/// use std::time::Duration;
///
/// let assistant = Assistant::new(TracingHelpAction)?;
/// if assistant.register_for_help(1, Duration::from_millis(500)) && assistant.sleeping() {
///     assistant.wake_up();
/// }
/// # Ok::<(), teaching_assistant::AssistantError>(())
/// ```
pub struct Assistant {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
    config: AssistantConfig,
}

impl Assistant {
    /// Assistant with the default four chair waiting room
    pub fn new(action: impl HelpAction) -> AssistantResult<Self> {
        Self::with_config(AssistantConfig::default(), action)
    }

    pub fn with_config(config: AssistantConfig, action: impl HelpAction) -> AssistantResult<Self> {
        Self::spawn(config, Box::new(action))
    }

    pub fn builder() -> AssistantBuilder {
        AssistantBuilder::new()
    }

    pub(super) fn spawn(
        config: AssistantConfig,
        action: Box<dyn HelpAction>,
    ) -> AssistantResult<Self> {
        config.validate()?;

        let shared = Arc::new(Shared::new(BoundedSlotQueue::new(config.capacity)?));
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name(config.worker_name.clone())
            .spawn(move || {
                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| worker::run(worker_shared, action)));
                if let Err(payload) = outcome {
                    error!("Assistant worker terminated: help action panicked");
                    panic::resume_unwind(payload);
                }
            })
            .map_err(|e| AssistantError::SpawnFailed(e.to_string()))?;

        info!(
            capacity = config.capacity,
            worker = %config.worker_name,
            "Assistant spawned"
        );

        Ok(Self {
            shared,
            worker: Some(worker),
            config,
        })
    }

    /// Take a seat in the waiting room.
    ///
    /// Returns false when there is no free chair; come back later. Does not
    /// wake a sleeping assistant.
    pub fn register_for_help(&self, student: StudentId, duration: Duration) -> bool {
        let seated = self.shared.register(HelpRequest::new(student, duration));
        if !seated {
            trace!(student, "Waiting room full");
        }
        seated
    }

    /// Register and, if seated while the assistant sleeps, wake it up
    pub fn register_and_wake(&self, student: StudentId, duration: Duration) -> bool {
        self.shared
            .register_and_wake(HelpRequest::new(student, duration))
    }

    /// Snapshot; may be stale as soon as it returns
    pub fn sleeping(&self) -> bool {
        self.state().is_sleeping()
    }

    pub fn state(&self) -> AssistantState {
        self.shared.inner.lock().state
    }

    /// Wake the assistant. Harmless when it is already working.
    pub fn wake_up(&self) {
        self.shared.wake_up();
    }

    pub fn stats(&self) -> AssistantStats {
        self.shared.inner.lock().stats()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// False once the worker has stopped, either after shutdown or because
    /// the help action panicked
    pub fn worker_alive(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the worker and wait for it.
    ///
    /// A help session in progress runs to completion first. Students still
    /// in the waiting room are not served.
    pub fn shutdown(mut self) -> AssistantResult<()> {
        self.shared.request_shutdown();

        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| AssistantError::WorkerPanicked),
            None => Ok(()),
        }
    }
}

impl Drop for Assistant {
    fn drop(&mut self) {
        // Stop without joining; the worker may be mid-session
        if self.worker.is_some() {
            self.shared.request_shutdown();
        }
    }
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("worker_alive", &self.worker_alive())
            .finish()
    }
}
