use thiserror::Error;

/// Errors raised while constructing a [`RingBuffer`](crate::RingBuffer).
///
/// A full buffer on push or an empty buffer on pop are ordinary outcomes and
/// are reported through `bool`, `Option` or `Result<(), T>` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// A constructor argument was out of range, e.g. a zero capacity.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
