use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use crate::{
    ClearPolicy, RingBufferError, RingBufferOptions,
    cursor::{Cursor, IntoIter, Iter},
    trace::trace_event,
};

/// A fixed-capacity FIFO queue over a single contiguous allocation.
///
/// The storage is allocated once, in [`RingBuffer::new`], and never grows,
/// shrinks or moves afterwards. Slots are reused through modular index
/// arithmetic: `head` names the oldest element, `tail` the slot the next push
/// writes to, and a separate element count tells a full buffer apart from an
/// empty one (in both cases `head == tail`).
///
/// A full buffer rejects pushes and an empty buffer yields nothing; neither is
/// an error.
///
/// # Examples
///
/// ```rust
/// use fixring::RingBuffer;
///
/// let mut buffer = RingBuffer::new(3).unwrap();
/// assert!(buffer.push(1));
/// assert!(buffer.push(2));
/// assert!(buffer.push(3));
/// assert!(!buffer.push(4));
///
/// assert_eq!(buffer.pop(), Some(1));
/// assert!(buffer.push(4));
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    options: RingBufferOptions,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        Self::with_options(capacity, RingBufferOptions::default())
    }

    /// Creates an empty buffer with explicit [`RingBufferOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::InvalidArgument`] if `capacity` is zero.
    pub fn with_options(
        capacity: usize,
        options: RingBufferOptions,
    ) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            trace_event!("rejected ring buffer with zero capacity");
            return Err(RingBufferError::InvalidArgument(
                "ring buffer capacity must be greater than zero",
            ));
        }

        let slots = core::iter::repeat_with(|| None).take(capacity).collect();
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
            options,
        })
    }

    /// The fixed number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of pushes that would currently succeed.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity() - self.len
    }

    /// `true` when no element is held.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` when every slot is occupied and pushes are rejected.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// The options this buffer was constructed with.
    #[must_use]
    pub fn options(&self) -> RingBufferOptions {
        self.options
    }

    // Only reachable with a non-zero capacity: every caller has checked that
    // the buffer is non-empty or not full first.
    #[inline]
    fn wrap(&self, index: usize) -> usize {
        index % self.capacity()
    }

    #[inline]
    fn write_tail(&mut self, item: T) {
        // Under `ClearPolicy::Deferred` this drops a stale element.
        self.slots[self.tail] = Some(item);
        self.tail = self.wrap(self.tail + 1);
        self.len += 1;
    }

    /// Appends `item` at the back of the queue.
    ///
    /// # Errors
    ///
    /// If the buffer is full the item is handed back unchanged and the buffer
    /// is left untouched.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            trace_event!(capacity = self.capacity(), "push rejected, ring buffer is full");
            return Err(item);
        }
        self.write_tail(item);
        Ok(())
    }

    /// Appends `item` at the back of the queue, returning `false` (and
    /// dropping `item`) if the buffer is full.
    ///
    /// Use [`try_push`](Self::try_push) to get a rejected item back.
    pub fn push(&mut self, item: T) -> bool {
        self.try_push(item).is_ok()
    }

    /// Removes and returns the oldest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        item
    }

    /// Moves the oldest element into `out`. Returns `false` and leaves `out`
    /// alone if the buffer is empty.
    pub fn pop_into(&mut self, out: &mut T) -> bool {
        match self.pop() {
            Some(item) => {
                *out = item;
                true
            }
            None => false,
        }
    }

    /// Borrows the oldest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a copy of the oldest element without removing it.
    #[must_use]
    pub fn peek_cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek().cloned()
    }

    /// Copies the oldest element into `out`. Returns `false` and leaves `out`
    /// alone if the buffer is empty.
    pub fn peek_into(&self, out: &mut T) -> bool
    where
        T: Clone,
    {
        match self.peek() {
            Some(item) => {
                out.clone_from(item);
                true
            }
            None => false,
        }
    }

    /// Borrows the element `index` positions behind the oldest one.
    ///
    /// `get(0)` is the same as [`peek`](Self::peek).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.wrap(self.head + index)].as_ref()
    }

    /// Forgets every held element and rewinds to the freshly constructed
    /// state.
    ///
    /// Whether the elements are dropped now or when their slots are reused is
    /// decided by [`RingBufferOptions::clear_policy`].
    pub fn clear(&mut self) {
        trace_event!(
            len = self.len,
            policy = ?self.options.clear_policy,
            "clearing ring buffer"
        );
        if self.options.clear_policy == ClearPolicy::Eager {
            while self.pop().is_some() {}
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Pushes items in order until the buffer fills up or `items` runs out.
    ///
    /// Returns how many items were inserted. Earlier insertions are kept when
    /// a later one does not fit. Items past the stopping point are never
    /// pulled from the iterator, so passing `iter.by_ref()` keeps them
    /// available to the caller.
    ///
    /// ```rust
    /// use fixring::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2).unwrap();
    /// let mut items = [1, 2, 3].into_iter();
    /// assert_eq!(buffer.push_multiple(items.by_ref()), 2);
    /// assert_eq!(items.next(), Some(3));
    /// ```
    pub fn push_multiple<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let mut pushed = 0;
        while !self.is_full() {
            let Some(item) = items.next() else {
                break;
            };
            self.write_tail(item);
            pushed += 1;
        }
        pushed
    }

    /// Clones the longest prefix of `items` that fits.
    ///
    /// Returns how many items were inserted.
    pub fn push_slice(&mut self, items: &[T]) -> usize
    where
        T: Clone,
    {
        self.push_multiple(items.iter().cloned())
    }

    /// Removes up to `n` elements, oldest first.
    ///
    /// Returns fewer than `n` elements if the buffer runs empty.
    pub fn pop_multiple(&mut self, n: usize) -> Vec<T> {
        let mut popped = Vec::with_capacity(n.min(self.len));
        popped.extend(core::iter::from_fn(|| self.pop()).take(n));
        popped
    }

    /// Moves elements, oldest first, into a prefix of `out`.
    ///
    /// Returns how many slots of `out` were written.
    pub fn pop_into_slice(&mut self, out: &mut [T]) -> usize {
        let mut popped = 0;
        for slot in out.iter_mut() {
            let Some(item) = self.pop() else {
                break;
            };
            *slot = item;
            popped += 1;
        }
        popped
    }

    /// A cursor at the oldest element.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// A cursor one past the newest element.
    #[must_use]
    pub fn end_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Iterates over the held elements, oldest first.
    ///
    /// The iterator borrows the buffer, so the buffer cannot be modified
    /// until the traversal is finished.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.cursor(), self.end_cursor())
    }

    /// Asserts the internal bookkeeping is consistent.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        assert!(self.len <= self.capacity(), "count exceeds capacity");
        if self.capacity() == 0 {
            assert_eq!((self.head, self.tail, self.len), (0, 0, 0));
            return;
        }
        assert!(self.head < self.capacity(), "head out of range");
        assert!(self.tail < self.capacity(), "tail out of range");
        assert_eq!(self.tail, self.wrap(self.head + self.len), "tail drifted");
        for offset in 0..self.capacity() {
            let occupied = self.slots[self.wrap(self.head + offset)].is_some();
            if offset < self.len {
                assert!(occupied, "live slot {offset} is vacant");
            } else if self.options.clear_policy == ClearPolicy::Eager {
                assert!(!occupied, "free slot {offset} still holds an element");
            }
        }
    }
}

/// The zero-capacity buffer a value is left in after
/// `core::mem::take(&mut buffer)`.
///
/// It accepts no pushes and yields no pops.
impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self {
            slots: Box::default(),
            head: 0,
            tail: 0,
            len: 0,
            options: RingBufferOptions::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("elements", &self.iter())
            .finish()
    }
}

/// Buffers are equal when they have the same capacity and hold equal
/// elements in the same FIFO order, wherever those sit in storage.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
