/*!
 * Assistant State
 */

use serde::{Deserialize, Serialize};

/// What the assistant is doing right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantState {
    /// Draining the waiting room
    #[default]
    Working,
    /// Parked until someone calls `wake_up`
    Sleeping,
}

impl AssistantState {
    #[inline]
    pub fn is_sleeping(self) -> bool {
        matches!(self, Self::Sleeping)
    }
}
