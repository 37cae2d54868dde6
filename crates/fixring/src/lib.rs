//! A fixed-capacity FIFO ring buffer.
//!
//! [`RingBuffer`] allocates its storage once and reuses slots through modular
//! index arithmetic. An explicit element count, rather than comparing `head`
//! and `tail`, decides whether the buffer is empty or full.
//!
//! Running out of room or out of elements is an ordinary outcome reported
//! through `bool`, `Option` or `Result<(), T>`. The only error is asking for a
//! zero capacity.
//!
//! ```rust
//! use fixring::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(5).unwrap();
//! assert_eq!(buffer.push_multiple(1..=7), 5);
//! assert!(buffer.is_full());
//!
//! assert_eq!(buffer.pop_multiple(2), [1, 2]);
//! assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
//! ```
//!
//! The crate is `no_std` and only needs `alloc`. Enable the `tracing` feature
//! to get `trace!` events for rejected pushes and clears.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod options;
mod ring_buffer;
mod trace;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, IntoIter, Iter};
pub use error::RingBufferError;
pub use options::{ClearPolicy, RingBufferOptions};
pub use ring_buffer::RingBuffer;
