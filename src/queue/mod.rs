/*!
 * Waiting Room
 * Bounded FIFO of students waiting for the assistant
 */

mod bounded;
mod slot;

pub use bounded::BoundedSlotQueue;
pub use slot::Slot;
