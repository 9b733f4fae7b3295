/*!
 * Assistant Worker
 *
 * The single consumer loop. One lock guards the waiting room, the state,
 * and the counters; one condvar parks the worker while it sleeps.
 *
 * # Loop
 *
 * 1. Under the lock, try to take the student at the consumer cursor.
 * 2. Got one: drop the lock, run the help action, then block for the
 *    requested time (lock not held), and go straight back to step 1.
 * 3. Room empty: mark Sleeping in that same critical section, drop the lock,
 *    announce the nap, then re-lock and wait on the condvar for as long as
 *    the state is still Sleeping.
 *
 * Sleeping is set in the critical section that saw the empty room and is
 * re-checked under the lock before every wait, so a `wake_up` that lands
 * before the wait begins is never lost and spurious wakes are invisible.
 */

use super::action::HelpAction;
use super::state::AssistantState;
use super::stats::AssistantStats;
use crate::core::limits::SLEEPING_NOTICE;
use crate::core::types::HelpRequest;
use crate::queue::BoundedSlotQueue;
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, trace};

/// Everything behind the lock
#[derive(Debug)]
pub(super) struct Inner {
    pub room: BoundedSlotQueue,
    pub state: AssistantState,
    pub shutdown: bool,
    pub accepted: u64,
    pub rejected: u64,
    pub served: u64,
    pub naps: u64,
    pub wake_ups: u64,
}

impl Inner {
    pub fn new(room: BoundedSlotQueue) -> Self {
        Self {
            room,
            state: AssistantState::Working,
            shutdown: false,
            accepted: 0,
            rejected: 0,
            served: 0,
            naps: 0,
            wake_ups: 0,
        }
    }

    pub fn stats(&self) -> AssistantStats {
        AssistantStats {
            capacity: self.room.capacity(),
            waiting: self.room.len(),
            state: self.state,
            accepted: self.accepted,
            rejected: self.rejected,
            served: self.served,
            naps: self.naps,
            wake_ups: self.wake_ups,
        }
    }
}

/// State shared between the handle, callers, and the worker thread
#[derive(Debug)]
pub(super) struct Shared {
    pub inner: Mutex<Inner>,
    pub wake_up_call: Condvar,
}

impl Shared {
    pub fn new(room: BoundedSlotQueue) -> Self {
        Self {
            inner: Mutex::new(Inner::new(room)),
            wake_up_call: Condvar::new(),
        }
    }

    pub fn register(&self, request: HelpRequest) -> bool {
        let mut inner = self.inner.lock();
        let seated = inner.room.try_enqueue(request);
        if seated {
            inner.accepted += 1;
        } else {
            inner.rejected += 1;
        }
        seated
    }

    /// Register, and if that worked while the worker sleeps, wake it in the
    /// same critical section
    pub fn register_and_wake(&self, request: HelpRequest) -> bool {
        let mut inner = self.inner.lock();
        if !inner.room.try_enqueue(request) {
            inner.rejected += 1;
            return false;
        }
        inner.accepted += 1;
        if inner.state.is_sleeping() {
            inner.wake_ups += 1;
            inner.state = AssistantState::Working;
            self.wake_up_call.notify_one();
        }
        true
    }

    pub fn wake_up(&self) {
        let mut inner = self.inner.lock();
        inner.wake_ups += 1;
        inner.state = AssistantState::Working;
        self.wake_up_call.notify_one();
    }

    pub fn request_shutdown(&self) {
        let mut inner = self.inner.lock();
        inner.shutdown = true;
        self.wake_up_call.notify_one();
    }
}

/// Outcome of one pass through the critical section
enum Next {
    Help(HelpRequest),
    Sleep,
    Stop,
}

/// Worker thread body. Returns only after a shutdown request.
pub(super) fn run(shared: Arc<Shared>, action: Box<dyn HelpAction>) {
    info!("Assistant worker started");

    loop {
        let next = {
            let mut inner = shared.inner.lock();
            if inner.shutdown {
                Next::Stop
            } else if let Some(request) = inner.room.try_dequeue() {
                inner.served += 1;
                Next::Help(request)
            } else {
                inner.state = AssistantState::Sleeping;
                inner.naps += 1;
                Next::Sleep
            }
        };

        match next {
            Next::Help(request) => {
                debug!(
                    student = request.student,
                    duration_ms = request.duration.as_millis() as u64,
                    "Helping student"
                );
                action.help(&request.help_message());
                // Runs to completion; nothing interrupts a help session
                thread::sleep(request.duration);
            }
            Next::Sleep => {
                action.help(SLEEPING_NOTICE);
                info!("Assistant sleeping");

                let mut inner = shared.inner.lock();
                while inner.state.is_sleeping() && !inner.shutdown {
                    shared.wake_up_call.wait(&mut inner);
                    trace!(state = ?inner.state, "Assistant worker woke");
                }
                if !inner.shutdown {
                    info!(waiting = inner.room.len(), "Assistant woken up");
                }
            }
            Next::Stop => break,
        }
    }

    let left_behind = shared.inner.lock().room.len();
    info!(left_behind, "Assistant worker stopped");
}
