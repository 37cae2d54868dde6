/// Configuration options for a [`RingBuffer`](crate::RingBuffer).
///
/// # Examples
///
/// ```rust
/// use fixring::{ClearPolicy, RingBuffer, RingBufferOptions};
///
/// let buffer: RingBuffer<String> = RingBuffer::with_options(
///     8,
///     RingBufferOptions {
///         clear_policy: ClearPolicy::Deferred,
///     },
/// )
/// .unwrap();
/// assert_eq!(buffer.options().clear_policy, ClearPolicy::Deferred);
/// ```
///
/// # Default
///
/// `clear_policy` defaults to [`ClearPolicy::Eager`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingBufferOptions {
    /// What [`RingBuffer::clear`](crate::RingBuffer::clear) does with the
    /// elements it forgets.
    ///
    /// # Default
    ///
    /// [`ClearPolicy::Eager`]
    pub clear_policy: ClearPolicy,
}

/// Controls when elements forgotten by `clear()` are dropped.
///
/// Both policies leave the buffer indistinguishable from a freshly
/// constructed one, and both drop every element exactly once over the
/// buffer's lifetime. They differ only in *when* the drop happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Drop every held element during `clear()`.
    #[default]
    Eager,
    /// Reset the bookkeeping only. A stale element stays in its slot until
    /// that slot is written again or the buffer is dropped.
    ///
    /// `clear()` becomes O(1) regardless of the element type, at the cost of
    /// holding on to resources owned by the stale elements.
    Deferred,
}
