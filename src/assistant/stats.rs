/*!
 * Assistant Statistics
 */

use super::state::AssistantState;
use serde::{Deserialize, Serialize};

/// Consistent snapshot of the assistant, taken under its lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantStats {
    pub capacity: usize,
    /// Students currently seated in the waiting room
    pub waiting: usize,
    pub state: AssistantState,
    /// Successful registrations
    pub accepted: u64,
    /// Registrations turned away because the room was full
    pub rejected: u64,
    /// Students taken out of the waiting room by the worker
    pub served: u64,
    /// Times the worker went to sleep
    pub naps: u64,
    /// Calls to `wake_up`, including ones made while already working
    pub wake_ups: u64,
}
