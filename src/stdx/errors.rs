//! Error types for fallible ring buffer operations.

use core::fmt;

/// Returned by [`RingBuffer::try_insert`](super::RingBuffer::try_insert)
/// when the buffer is full.
///
/// Ownership of the rejected value stays with the caller through
/// [`into_inner`](Self::into_inner) instead of being dropped.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    value: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    #[inline]
    pub(crate) fn new(value: T, capacity: usize) -> Self {
        Self { value, capacity }
    }

    /// Capacity of the buffer that rejected the value.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the value that could not be inserted.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Manual impl so `T: Debug` is not required to report the error.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring buffer full (capacity: {})", self.capacity)
    }
}

impl<T> core::error::Error for CapacityError<T> {}
