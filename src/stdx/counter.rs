//! Counter widths for [`RingBuffer`](super::RingBuffer) head/tail bookkeeping.
//!
//! The ring tracks two free-running counters and only ever looks at their
//! difference and their low `log2(N)` bits. Both are correct under
//! wraparound as long as `2^bits` is a multiple of the capacity, so the
//! counter type can be narrower than `usize` to shrink the struct.
//!
//! # Invariants
//! - `wrapping_add`/`wrapping_sub` are exact modulo `2^bits`.
//! - `widen` is lossless for every value `<= MAX`, which is what the ring
//!   relies on for occupancy counts (always `<= N <= MAX`).

use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer usable as a ring head/tail counter.
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64` and `usize` only.
pub trait Counter: sealed::Sealed + Copy + Eq + Debug {
    /// Zero value; both counters start here.
    const ZERO: Self;
    /// Largest representable value, widened to `u64` for const checks.
    const MAX: u64;

    /// `self + n` modulo `2^bits`, with `n` truncated first.
    fn wrapping_add(self, n: usize) -> Self;

    /// `self - rhs` modulo `2^bits`.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Value as `usize`. Callers only widen occupancy counts or mask the
    /// result, so truncation of a `u64` on 32-bit targets is harmless.
    fn widen(self) -> usize;
}

macro_rules! impl_counter {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Counter for $t {
                const ZERO: Self = 0;
                const MAX: u64 = <$t>::MAX as u64;

                #[inline(always)]
                fn wrapping_add(self, n: usize) -> Self {
                    <$t>::wrapping_add(self, n as $t)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn widen(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_counter!(u8, u16, u32, u64, usize);
