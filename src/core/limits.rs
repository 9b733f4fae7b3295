/*!
 * Limits and Constants
 *
 * Centralized location for waiting room sizes, notices, and simulation defaults.
 */

use std::time::Duration;

// =============================================================================
// WAITING ROOM
// =============================================================================

/// Default number of chairs in the waiting room
pub const DEFAULT_WAITING_ROOM_CAPACITY: usize = 4;

/// Smallest usable waiting room
pub const MIN_WAITING_ROOM_CAPACITY: usize = 1;

// =============================================================================
// ASSISTANT
// =============================================================================

/// Default name of the worker thread
pub const DEFAULT_WORKER_NAME: &str = "assistant";

/// Notice passed to the help action right before the assistant parks
pub const SLEEPING_NOTICE: &str = "Sleeping...";

// =============================================================================
// SIMULATION DEFAULTS
// =============================================================================

/// Students spawned by the default simulation
pub const DEFAULT_STUDENTS: u32 = 6;

/// Visits each student makes to the assistant
pub const DEFAULT_VISITS_PER_STUDENT: u32 = 2;

/// Upper bound on time a student spends programming between visits (ms)
pub const DEFAULT_MAX_PROGRAMMING_MS: u64 = 1_500;

/// Upper bound on help time a student asks for (ms)
pub const DEFAULT_MAX_HELP_MS: u64 = 1_000;

/// Wait before a turned-away student tries again (ms)
pub const DEFAULT_RETRY_DELAY_MS: u64 = 250;

/// How long the harness waits for the room to drain after the last visit (ms)
pub const DEFAULT_COMPLETION_TIMEOUT_MS: u64 = 60_000;

/// Poll interval used by the harness (never by the worker) while draining
pub const HARNESS_POLL_INTERVAL: Duration = Duration::from_millis(10);
