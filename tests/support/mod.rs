/*!
 * Shared test helpers
 */

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use teaching_assistant::HelpAction;

pub const SLEEPING: &str = "Sleeping...";

/// Help action that records every message it receives
#[derive(Clone, Default)]
pub struct HelpLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl HelpLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action to hand to the assistant; shares this log
    pub fn action(&self) -> impl HelpAction {
        let messages = self.messages.clone();
        move |message: &str| messages.lock().push(message.to_string())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Student ids from every "Helping student ..." message, in order
    pub fn helped(&self) -> Vec<u32> {
        self.messages
            .lock()
            .iter()
            .filter_map(|m| m.strip_prefix("Helping student "))
            .filter_map(|rest| rest.split_whitespace().next())
            .filter_map(|id| id.parse().ok())
            .collect()
    }

    pub fn naps(&self) -> usize {
        self.messages.lock().iter().filter(|m| *m == SLEEPING).count()
    }
}

/// Spin (with short sleeps) until `condition` holds or `timeout` passes
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    condition()
}
