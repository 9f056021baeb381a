//! Rename-slot allocation.
//!
//! Slots are handed out as a stack: entering a scope allocates on top of the
//! current counter and leaving it releases back to the saved mark, so sibling
//! scopes reuse the same slot numbers. The high-water mark is never lowered.

use crate::info::SlotId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotAllocator {
    next: u32,
    high_water: u32,
}

impl SlotAllocator {
    pub fn new() -> SlotAllocator {
        SlotAllocator::default()
    }

    pub fn alloc(&mut self) -> SlotId {
        let slot = SlotId(self.next);
        self.next += 1;
        self.high_water = self.high_water.max(self.next);
        slot
    }

    /// Current counter, to be passed back to `release_to`.
    #[inline]
    pub fn mark(&self) -> u32 {
        self.next
    }

    /// Free every slot allocated since `mark` was taken.
    pub fn release_to(&mut self, mark: u32) {
        debug_assert!(mark <= self.next, "slot mark {mark} above counter {}", self.next);
        self.next = mark;
    }

    /// Number of slots currently live.
    #[inline]
    pub fn live(&self) -> u32 {
        self.next
    }

    #[inline]
    pub fn high_water(&self) -> u32 {
        self.high_water
    }
}
