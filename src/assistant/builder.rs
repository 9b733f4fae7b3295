/*!
 * Assistant Builder
 * Builder pattern for Assistant construction
 */

use super::action::HelpAction;
use super::config::AssistantConfig;
use super::handle::Assistant;
use crate::core::errors::AssistantResult;

/// Builder for Assistant
#[derive(Debug, Clone, Default)]
pub struct AssistantBuilder {
    config: AssistantConfig,
}

impl AssistantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chairs in the waiting room
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Name of the worker thread
    pub fn worker_name(mut self, name: impl Into<String>) -> Self {
        self.config.worker_name = name.into();
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: AssistantConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and spawn the worker
    pub fn build(self, action: impl HelpAction) -> AssistantResult<Assistant> {
        Assistant::spawn(self.config, Box::new(action))
    }
}
