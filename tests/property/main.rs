//! Property-based tests over the public `RingBuffer` API.
//!
//! Run with: `cargo test --test property`

mod ring_buffer_bulk;
mod ring_buffer_fifo;
