//! Rotating output buffers for value lookups.
//!
//! [`InfoCodec::value_for_key`](crate::InfoCodec::value_for_key) copies each
//! value it finds into the next buffer of a [`ValueRing`] and hands back a
//! [`ValueSlot`]. The two most recent slots always resolve, so two lookups
//! can be compared side by side. Storing a third value overwrites the oldest
//! buffer, and its slot stops resolving instead of silently showing the new
//! contents.

use gametext_foundation::MAX_INFO_VALUE;

/// Number of output buffers in a [`ValueRing`].
pub const VALUE_RING_LEN: usize = 2;

/// Handle to a value stored in a [`ValueRing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueSlot {
    index: usize,
    generation: u64,
}

/// A fixed ring of owned output buffers.
#[derive(Clone, Debug)]
pub struct ValueRing {
    buffers: [String; VALUE_RING_LEN],
    generations: [u64; VALUE_RING_LEN],
    next: usize,
    generation: u64,
}

impl ValueRing {
    /// Creates a ring whose buffers are preallocated to `capacity` bytes.
    ///
    /// Preallocation stops at [`MAX_INFO_VALUE`] bytes; longer values still
    /// fit, the buffers just grow on demand.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_INFO_VALUE);
        Self {
            buffers: std::array::from_fn(|_| String::with_capacity(capacity)),
            generations: [0; VALUE_RING_LEN],
            next: 0,
            generation: 0,
        }
    }

    /// Copies `value` into the oldest buffer and returns its slot.
    pub fn store(&mut self, value: &str) -> ValueSlot {
        let index = self.next;
        self.next = (self.next + 1) % VALUE_RING_LEN;
        self.generation += 1;

        let buffer = &mut self.buffers[index];
        buffer.clear();
        buffer.push_str(value);
        self.generations[index] = self.generation;

        ValueSlot {
            index,
            generation: self.generation,
        }
    }

    /// Returns the value behind `slot`, or `None` once it has been overwritten.
    #[must_use]
    pub fn get(&self, slot: ValueSlot) -> Option<&str> {
        (self.generations[slot.index] == slot.generation).then(|| self.buffers[slot.index].as_str())
    }
}

impl Default for ValueRing {
    fn default() -> Self {
        Self::with_capacity(MAX_INFO_VALUE)
    }
}
