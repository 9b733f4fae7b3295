/*!
 * Teaching Assistant
 *
 * One background worker serving a bounded waiting room.
 *
 * # Architecture
 *
 * - **Handle** (`Assistant`): caller-facing API, owns the worker thread
 * - **Worker**: the single consumer loop, parked on a condvar while sleeping
 * - **HelpAction**: injected side effect run for each served student
 *
 * All shared state sits behind one `parking_lot::Mutex` with one
 * `parking_lot::Condvar`. Callers never block on anything but that lock.
 */

mod action;
mod builder;
mod config;
mod handle;
mod state;
mod stats;
mod worker;

pub use action::{HelpAction, StdoutHelpAction, TracingHelpAction};
pub use builder::AssistantBuilder;
pub use config::AssistantConfig;
pub use handle::Assistant;
pub use state::AssistantState;
pub use stats::AssistantStats;
