//! Fixed-capacity ring buffer with inline `MaybeUninit<T>` storage and
//! free-running head/tail counters.
//!
//! # Invariants
//! - `N` is a non-zero power of 2 and `N <= I::MAX` (validated at compile time).
//! - `head - tail <= N`, computed with wrapping arithmetic in `I`.
//! - The element at logical index `i` lives at `(tail + i) & MASK` and is
//!   initialized for every `i < head - tail`; all other slots may be
//!   uninitialized.
//!
//! # Counters
//! `head` counts every element ever inserted and `tail` every element ever
//! removed. Neither is reduced modulo `N`; only their low bits select a slot.
//! Because `2^bits(I)` is a multiple of `N`, counter overflow is invisible to
//! both the occupancy count and the slot mapping.
//!
//! # Threading
//! This type is not synchronized; it assumes single-threaded usage.

use core::fmt;
use core::iter::FusedIterator;
use core::mem::MaybeUninit;
use core::slice;

use super::counter::Counter;
use super::errors::CapacityError;

/// Fixed-capacity FIFO backed by inline storage.
///
/// Design intent:
/// - Compile-time capacity so backpressure is deterministic.
/// - Zero heap allocations; the whole buffer is a single inline value and can
///   live in a `static`.
/// - Counter width `I` is a type parameter so small rings can use `u8` or
///   `u16` counters and keep the struct compact.
///
/// Capacity exhaustion and underflow are reported through `bool`, `Option`
/// and short counts, never panics. Misconfiguration (non-power-of-2 `N`, or
/// `N` too large for `I`) fails to compile.
///
/// Elements are `Copy`: removal is pure accounting and nothing is dropped.
///
/// The largest capacity a counter type admits is its maximum value rounded
/// down to a power of 2:
///
/// ```
/// use ringfifo::RingBuffer;
///
/// let mut rb = RingBuffer::<u8, 128, u8>::new();
/// assert_eq!(rb.write_slice(&[0xAA; 200]), 128);
/// assert!(rb.is_full());
/// ```
///
/// A capacity that is not a power of 2 is rejected:
///
/// ```compile_fail
/// use ringfifo::RingBuffer;
///
/// let _rb = RingBuffer::<u32, 3>::new();
/// ```
///
/// So is a zero capacity:
///
/// ```compile_fail
/// use ringfifo::RingBuffer;
///
/// let _rb = RingBuffer::<u32, 0>::new();
/// ```
///
/// And one the counter type cannot count up to (`u8::MAX == 255 < 256`):
///
/// ```compile_fail
/// use ringfifo::RingBuffer;
///
/// let _rb = RingBuffer::<u8, 256, u8>::new();
/// ```
pub struct RingBuffer<T, const N: usize, I: Counter = usize> {
    head: I,
    tail: I,
    // Kept after the counters so both sit at small offsets.
    buf: [MaybeUninit<T>; N],
}

/// Create an uninitialized `[MaybeUninit<T>; N]` without running any constructors.
const fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
    // SAFETY: An uninitialized MaybeUninit<T> is valid.
    unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
}

impl<T: Copy, const N: usize, I: Counter> RingBuffer<T, N, I> {
    /// Bitmask for power-of-2 modulo: `counter & MASK == counter % N`.
    ///
    /// Every construction path touches this constant, so a bad `N` aborts
    /// compilation instead of producing a silently broken buffer.
    const MASK: usize = {
        assert!(N > 0, "RingBuffer capacity must be > 0");
        assert!(N & (N - 1) == 0, "RingBuffer capacity must be power of 2");
        assert!(
            N as u64 <= I::MAX,
            "RingBuffer capacity must fit in the counter type"
        );
        N - 1
    };

    /// Constructs an empty ring buffer (`head == tail == 0`).
    ///
    /// `const`, so it can initialize a `static` directly.
    pub const fn new() -> Self {
        let _ = Self::MASK;

        Self {
            head: I::ZERO,
            tail: I::ZERO,
            buf: uninit_array(),
        }
    }

    /// Reinterprets caller-provided backing memory as a ring buffer without
    /// writing to it.
    ///
    /// Intended for buffers placed in memory that is already zeroed (for
    /// example `.bss`), where running an initializer is wasted work. An
    /// all-zero value is an empty buffer.
    ///
    /// # Safety
    /// Both counters in `slot` must be initialized. If the memory is not
    /// all-zero the buffer contents are meaningless, and the caller must call
    /// [`clear`](Self::clear) before any other operation.
    pub unsafe fn assume_zeroed(slot: &mut MaybeUninit<Self>) -> &mut Self {
        let _ = Self::MASK;

        // SAFETY: The caller guarantees the counters are initialized; the
        // storage is `MaybeUninit` and has no validity requirement.
        unsafe { slot.assume_init_mut() }
    }

    /// Maps a free-running counter onto a physical slot.
    #[inline(always)]
    fn slot(pos: I) -> usize {
        // PERF: Uses bitwise AND instead of modulo for power-of-2 capacity.
        pos.widen() & Self::MASK
    }

    /// Maximum number of elements the buffer can hold (`N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of elements available to remove (`head - tail`).
    #[inline]
    pub fn read_available(&self) -> usize {
        let len = self.head.wrapping_sub(self.tail).widen();
        debug_assert!(len <= N, "ring occupancy exceeds capacity");
        len
    }

    /// Number of free slots (`N - (head - tail)`).
    #[inline]
    pub fn write_available(&self) -> usize {
        N - self.read_available()
    }

    /// Returns true when no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true when `read_available() == N`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.write_available() == 0
    }

    /// Discards every stored element by setting `tail = head`.
    ///
    /// Slot contents are left as they are.
    #[inline]
    pub fn clear(&mut self) {
        self.tail = self.head;
        debug_assert!(self.is_empty());
    }

    /// Appends `value`, returning false (and leaving the buffer untouched)
    /// when full.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }

        let idx = Self::slot(self.head);

        // SAFETY: idx <= MASK < N.
        unsafe { self.buf.get_unchecked_mut(idx).write(value) };
        self.head = self.head.wrapping_add(1);

        debug_assert!(self.read_available() <= N);
        true
    }

    /// Appends a copy of `*value`. Same contract as [`insert`](Self::insert).
    #[inline]
    pub fn insert_ref(&mut self, value: &T) -> bool {
        self.insert(*value)
    }

    /// Appends `value`, handing it back inside the error when full.
    pub fn try_insert(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value, N));
        }
        let inserted = self.insert(value);
        debug_assert!(inserted);
        Ok(())
    }

    /// Discards the oldest element. Returns false when empty.
    #[inline]
    pub fn remove(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.tail = self.tail.wrapping_add(1);
        true
    }

    /// Copies the oldest element into `out` and discards it.
    ///
    /// Returns false and leaves `out` unmodified when empty.
    #[inline]
    pub fn remove_into(&mut self, out: &mut T) -> bool {
        match self.pop() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the oldest element, or `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let idx = Self::slot(self.tail);

        // SAFETY: idx < N, and the slot at `tail` is initialized because the
        // buffer is non-empty.
        let value = unsafe { self.buf.get_unchecked(idx).assume_init_read() };
        self.tail = self.tail.wrapping_add(1);

        Some(value)
    }

    /// Discards up to `count` of the oldest elements without copying them.
    ///
    /// Returns the number actually discarded, `min(count, read_available())`.
    pub fn remove_n(&mut self, count: usize) -> usize {
        let n = count.min(self.read_available());
        self.tail = self.tail.wrapping_add(n);
        n
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.at(0)
    }

    /// Mutable variant of [`peek`](Self::peek).
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0)
    }

    /// Returns the element `index` positions after the oldest one, or `None`
    /// when `index >= read_available()`.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        if index >= self.read_available() {
            return None;
        }
        // SAFETY: bounds checked above.
        Some(unsafe { self.get_unchecked(index) })
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.read_available() {
            return None;
        }
        // SAFETY: bounds checked above.
        Some(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns the element at logical `index` without a bounds check.
    ///
    /// # Safety
    /// `index < self.read_available()` must hold. Out-of-range indices
    /// may read an uninitialized slot, which is undefined behavior. Debug
    /// builds assert the bound.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.read_available(),
            "get_unchecked index out of range"
        );
        let idx = Self::slot(self.tail.wrapping_add(index));

        // SAFETY: idx <= MASK < N; the caller guarantees the slot is inside
        // the valid range and therefore initialized.
        unsafe { self.buf.get_unchecked(idx).assume_init_ref() }
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    /// Same contract as [`get_unchecked`](Self::get_unchecked).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.read_available(),
            "get_unchecked_mut index out of range"
        );
        let idx = Self::slot(self.tail.wrapping_add(index));

        // SAFETY: see `get_unchecked`.
        unsafe { self.buf.get_unchecked_mut(idx).assume_init_mut() }
    }

    /// Copies as many leading elements of `source` as fit and returns how
    /// many were written.
    ///
    /// Elements past `write_available()` are dropped; callers detect a
    /// partial write from the return value. The copy is at most two
    /// contiguous spans: `[head & MASK, N)` then `[0, ..)`.
    pub fn write_slice(&mut self, source: &[T]) -> usize {
        let n = source.len().min(self.write_available());
        if n == 0 {
            return 0;
        }

        let start = Self::slot(self.head);
        let (wrapped, upper) = self.buf.split_at_mut(start);
        let first = upper.len().min(n);

        for (dst, src) in upper[..first].iter_mut().zip(&source[..first]) {
            dst.write(*src);
        }
        // Free space is contiguous modulo N, so the wrapped span ends at or
        // before the oldest element.
        for (dst, src) in wrapped[..n - first].iter_mut().zip(&source[first..n]) {
            dst.write(*src);
        }

        self.head = self.head.wrapping_add(n);
        debug_assert!(self.read_available() <= N);
        n
    }

    /// Moves up to `dest.len()` of the oldest elements into `dest` and
    /// returns how many were read.
    pub fn read_slice(&mut self, dest: &mut [T]) -> usize {
        let n = dest.len().min(self.read_available());
        if n == 0 {
            return 0;
        }

        let (front, back) = self.as_slices();
        let first = front.len().min(n);
        dest[..first].copy_from_slice(&front[..first]);
        dest[first..n].copy_from_slice(&back[..n - first]);

        self.tail = self.tail.wrapping_add(n);
        n
    }

    /// Returns the stored elements as up to two slices in FIFO order.
    ///
    /// The first slice starts at the oldest element; the second (possibly
    /// empty) slice holds the wrapped remainder.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let len = self.read_available();
        let start = Self::slot(self.tail);
        let first = (N - start).min(len);
        let base = self.buf.as_ptr().cast::<T>();

        // SAFETY: `MaybeUninit<T>` has the layout of `T`. `[start, start +
        // first)` and `[0, len - first)` lie inside the buffer and are exactly
        // the initialized logical range.
        unsafe {
            (
                slice::from_raw_parts(base.add(start), first),
                slice::from_raw_parts(base, len - first),
            )
        }
    }

    /// Iterates over stored elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T, N, I> {
        Iter {
            ring: self,
            front: 0,
            back: self.read_available(),
        }
    }
}

impl<T: Copy, const N: usize, I: Counter> Default for RingBuffer<T, N, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize, I: Counter> Clone for RingBuffer<T, N, I> {
    fn clone(&self) -> Self {
        // Uninitialized slots are copied as `MaybeUninit` bytes; only the
        // logical range is ever read back.
        Self {
            head: self.head,
            tail: self.tail,
            buf: self.buf,
        }
    }
}

impl<T: Copy + fmt::Debug, const N: usize, I: Counter> fmt::Debug for RingBuffer<T, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Inserts until full; the remainder of the iterator is not consumed.
impl<T: Copy, const N: usize, I: Counter> Extend<T> for RingBuffer<T, N, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for value in iter {
            if !self.insert(value) {
                break;
            }
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize, I: Counter> Extend<&'a T> for RingBuffer<T, N, I> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        Extend::<T>::extend(self, iter.into_iter().copied());
    }
}

impl<'a, T: Copy, const N: usize, I: Counter> IntoIterator for &'a RingBuffer<T, N, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest element first.
pub struct Iter<'a, T, const N: usize, I: Counter> {
    ring: &'a RingBuffer<T, N, I>,
    // Logical index range `[front, back)` not yet yielded.
    front: usize,
    back: usize,
}

impl<'a, T: Copy, const N: usize, I: Counter> Iterator for Iter<'a, T, N, I> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back <= read_available() at creation, and the
        // shared borrow keeps the ring unchanged.
        let item = unsafe { self.ring.get_unchecked(self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T: Copy, const N: usize, I: Counter> DoubleEndedIterator for Iter<'_, T, N, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: see `next`.
        Some(unsafe { self.ring.get_unchecked(self.back) })
    }
}

impl<T: Copy, const N: usize, I: Counter> ExactSizeIterator for Iter<'_, T, N, I> {}

impl<T: Copy, const N: usize, I: Counter> FusedIterator for Iter<'_, T, N, I> {}
