/*!
 * Teaching Assistant Library
 *
 * A single assistant thread serving a fixed-size waiting room of students:
 * - Bounded circular waiting room with FIFO-by-slot service
 * - Explicit sleep / wake-up coordination on one lock and one condvar
 * - Injected help action for the work done per student
 * - Simulation harness driving the assistant from student threads
 */

pub mod assistant;
pub mod core;
pub mod monitoring;
pub mod queue;
pub mod simulation;

// Re-exports
pub use crate::assistant::{
    Assistant, AssistantBuilder, AssistantConfig, AssistantState, AssistantStats, HelpAction,
    StdoutHelpAction, TracingHelpAction,
};
pub use crate::core::errors::{AssistantError, AssistantResult};
pub use crate::core::types::{HelpRequest, StudentId};
pub use crate::monitoring::init_tracing;
pub use crate::queue::{BoundedSlotQueue, Slot};
pub use crate::simulation::{Simulation, SimulationConfig, SimulationReport};
