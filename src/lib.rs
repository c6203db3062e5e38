#![cfg_attr(not(test), no_std)]
//! Fixed-capacity ring buffer for allocation-free, predictable-cost FIFOs.
//!
//! ## Scope
//! [`RingBuffer<T, N, I>`](RingBuffer) stores up to `N` `Copy` elements
//! inline and tracks occupancy with two free-running counters of width `I`.
//! It never allocates, so it fits `static`s, stacks and `no_std` targets.
//!
//! ## Key invariants
//! - `N` is a power of two and `N <= I::MAX`; both are checked at compile
//!   time on every construction path.
//! - `head - tail` (wrapping) is the number of stored elements and never
//!   exceeds `N`.
//! - Slot selection is `counter & (N - 1)`, so counter overflow never
//!   desynchronizes storage from accounting.
//!
//! ## Error reporting
//! Full and empty conditions are ordinary outcomes: single-element calls
//! return `bool` or `Option`, bulk calls return the count actually moved.
//! [`RingBuffer::try_insert`] is the `Result` flavor and carries the rejected
//! value in a [`CapacityError`].
//!
//! ## Threading
//! No atomics, fences or locks. Sharing a buffer between a producer and a
//! consumer thread needs external synchronization.
//!
//! ```
//! use ringfifo::RingBuffer;
//!
//! let mut rb: RingBuffer<u32, 4, u8> = RingBuffer::new();
//! assert_eq!(rb.write_slice(&[1, 2, 3, 4, 5]), 4);
//! assert!(rb.is_full());
//! assert_eq!(rb.pop(), Some(1));
//! assert_eq!(rb.at(2), Some(&4));
//! ```

pub mod stdx;
#[cfg(test)]
pub mod test_utils;

pub use stdx::{CapacityError, Counter, Iter, RingBuffer};
