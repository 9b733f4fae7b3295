/*!
 * Assistant Configuration
 *
 * Runtime configuration for the waiting room and the worker thread
 */

use crate::core::errors::{AssistantError, AssistantResult};
use crate::core::limits::{
    DEFAULT_WAITING_ROOM_CAPACITY, DEFAULT_WORKER_NAME, MIN_WAITING_ROOM_CAPACITY,
};
use serde::{Deserialize, Serialize};

/// Assistant configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Chairs in the waiting room
    pub capacity: usize,
    /// Name given to the worker thread
    pub worker_name: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_WAITING_ROOM_CAPACITY,
            worker_name: DEFAULT_WORKER_NAME.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Default room with a custom number of chairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// One chair: every second student is turned away until the first is served
    pub fn single_chair() -> Self {
        Self::with_capacity(MIN_WAITING_ROOM_CAPACITY)
    }

    /// Load overrides from the environment
    ///
    /// Environment variables:
    /// - ASSISTANT_CAPACITY: number of chairs (default: 4)
    /// - ASSISTANT_WORKER_NAME: worker thread name (default: "assistant")
    pub fn from_env() -> AssistantResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("ASSISTANT_CAPACITY") {
            config.capacity = raw.trim().parse().map_err(|e| {
                AssistantError::Configuration(format!("ASSISTANT_CAPACITY={}: {}", raw, e))
            })?;
        }
        if let Ok(name) = std::env::var("ASSISTANT_WORKER_NAME") {
            config.worker_name = name;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AssistantResult<()> {
        if self.capacity < MIN_WAITING_ROOM_CAPACITY {
            return Err(AssistantError::InvalidCapacity(self.capacity));
        }
        if self.worker_name.is_empty() {
            return Err(AssistantError::Configuration(
                "worker name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
