//! Small, self-contained fixed-capacity data structures.

pub mod counter;
pub mod errors;
pub mod ring_buffer;

pub use counter::Counter;
pub use errors::CapacityError;
pub use ring_buffer::{Iter, RingBuffer};
