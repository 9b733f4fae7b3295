/*!
 * Slot
 * One chair in the waiting room
 */

use crate::core::types::HelpRequest;

/// A single waiting room position holding at most one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    request: Option<HelpRequest>,
}

impl Slot {
    pub const fn empty() -> Self {
        Self { request: None }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.request.is_some()
    }

    /// Seat a request. Returns false, leaving the slot untouched, if it is taken.
    #[inline]
    pub(super) fn occupy(&mut self, request: HelpRequest) -> bool {
        if self.is_occupied() {
            return false;
        }
        self.request = Some(request);
        true
    }

    /// Free the slot, handing back whoever sat in it
    #[inline]
    pub(super) fn vacate(&mut self) -> Option<HelpRequest> {
        self.request.take()
    }

    #[inline]
    pub fn request(&self) -> Option<&HelpRequest> {
        self.request.as_ref()
    }
}
