use core::{fmt, iter::FusedIterator};

use crate::RingBuffer;

/// A read-only position inside a borrowed [`RingBuffer`].
///
/// The position is logical: `0` is the oldest element no matter where it sits
/// in storage. A cursor holds a shared borrow, so the buffer can neither be
/// dropped nor mutated while the cursor is alive.
///
/// ```rust
/// use fixring::RingBuffer;
///
/// let mut buffer = RingBuffer::new(4).unwrap();
/// buffer.push_multiple(["a", "b", "c"]);
///
/// let mut cursor = buffer.cursor();
/// let end = buffer.end_cursor();
/// let mut seen = Vec::new();
/// while cursor != end {
///     seen.push(*cursor.get().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(seen, ["a", "b", "c"]);
/// ```
pub struct Cursor<'a, T> {
    buffer: &'a RingBuffer<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor `position` elements behind the oldest one.
    #[must_use]
    pub fn new(buffer: &'a RingBuffer<T>, position: usize) -> Self {
        Self { buffer, position }
    }

    /// The logical offset from the oldest element.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The element under the cursor, or `None` at or past the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.buffer.get(self.position)
    }

    /// Moves one element towards the newest.
    pub fn advance(&mut self) {
        self.position += 1;
    }
}

// Manual impls: a derive would demand `T: Clone`.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Cursors compare by logical position only; comparing cursors of different
/// buffers is meaningless.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest element first.
///
/// Created by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Self {
        Self { front, back }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.position - self.front.position;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.position -= 1;
        self.back.get()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator over a [`RingBuffer`], oldest element first.
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buffer: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: RingBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.buffer.iter()).finish()
    }
}
