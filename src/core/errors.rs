/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Assistant errors with serialization support
///
/// A full waiting room is not an error: `register_for_help` reports it as
/// `false` so students can simply come back later.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AssistantError {
    #[error("Invalid waiting room capacity: {0}")]
    #[diagnostic(
        code(assistant::invalid_capacity),
        help("The waiting room needs at least one chair. Use a capacity of 1 or more.")
    )]
    InvalidCapacity(usize),

    #[error("Failed to spawn assistant worker: {0}")]
    #[diagnostic(
        code(assistant::spawn_failed),
        help("The OS refused to create the worker thread. Check thread limits.")
    )]
    SpawnFailed(String),

    #[error("Assistant worker terminated abnormally")]
    #[diagnostic(
        code(assistant::worker_panicked),
        help("The injected help action panicked. Panics in the help action are fatal to the worker.")
    )]
    WorkerPanicked,

    #[error("Student {0} thread panicked")]
    #[diagnostic(
        code(assistant::student_panicked),
        help("A simulated student stopped before finishing its visits. Its outcome is lost.")
    )]
    StudentPanicked(u32),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(assistant::configuration_error),
        help("Invalid configuration. Review configuration parameters.")
    )]
    Configuration(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(assistant::io_error),
        help("Reading the configuration failed. Check the file path and permissions.")
    )]
    Io(String),

    #[error("Timeout: {0}")]
    #[diagnostic(
        code(assistant::timeout),
        help("Not every student was served in time. Try increasing the completion timeout.")
    )]
    Timeout(String),
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        AssistantError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::Configuration(err.to_string())
    }
}

/// Common result type for assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;
