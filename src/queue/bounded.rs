/*!
 * Bounded Slot Queue
 *
 * Fixed-capacity circular waiting room with independent producer and
 * consumer cursors and per-slot occupancy.
 *
 * # Invariants
 *
 * - Occupied slots form one contiguous run (mod capacity) starting at the
 *   consumer cursor and ending right before the producer cursor.
 * - A cursor only advances after mutating exactly the slot it points at.
 * - A registration at an occupied producer slot is rejected, never overwritten.
 *
 * The queue is a plain value with no interior locking. Its owner keeps it
 * behind a single lock (see `Assistant`).
 */

use super::slot::Slot;
use crate::core::errors::{AssistantError, AssistantResult};
use crate::core::limits::MIN_WAITING_ROOM_CAPACITY;
use crate::core::types::HelpRequest;

/// Circular waiting room of `capacity` chairs
#[derive(Debug, Clone)]
pub struct BoundedSlotQueue {
    slots: Box<[Slot]>,
    producer_cursor: usize,
    consumer_cursor: usize,
}

impl BoundedSlotQueue {
    pub fn new(capacity: usize) -> AssistantResult<Self> {
        if capacity < MIN_WAITING_ROOM_CAPACITY {
            return Err(AssistantError::InvalidCapacity(capacity));
        }

        Ok(Self {
            slots: vec![Slot::empty(); capacity].into_boxed_slice(),
            producer_cursor: 0,
            consumer_cursor: 0,
        })
    }

    /// Claim the slot at the producer cursor.
    ///
    /// Returns false when that slot is still occupied (room full). Nothing is
    /// reserved on failure; the caller retries later.
    #[must_use]
    pub fn try_enqueue(&mut self, request: HelpRequest) -> bool {
        if !self.slots[self.producer_cursor].occupy(request) {
            return false;
        }
        self.producer_cursor = self.advance(self.producer_cursor);
        true
    }

    /// Release the slot at the consumer cursor, if someone is sitting there
    pub fn try_dequeue(&mut self) -> Option<HelpRequest> {
        let request = self.slots[self.consumer_cursor].vacate()?;
        self.consumer_cursor = self.advance(self.consumer_cursor);
        Some(request)
    }

    #[inline]
    fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.slots.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.slots[self.consumer_cursor].is_occupied()
    }

    pub fn is_full(&self) -> bool {
        self.slots[self.producer_cursor].is_occupied()
    }

    pub fn producer_cursor(&self) -> usize {
        self.producer_cursor
    }

    pub fn consumer_cursor(&self) -> usize {
        self.consumer_cursor
    }

    /// Waiting requests in the order they will be served
    pub fn waiting(&self) -> Vec<HelpRequest> {
        let capacity = self.capacity();
        (0..capacity)
            .map(|offset| &self.slots[(self.consumer_cursor + offset) % capacity])
            .map_while(|slot| slot.request().copied())
            .collect()
    }
}
