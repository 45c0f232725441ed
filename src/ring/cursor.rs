use crate::ring::{NodeIndex, Ring};
use crate::RingError;
use std::fmt;
use std::fmt::Formatter;

/// A read-only cursor over a `Ring`.
///
/// A `Cursor` always points at a node of the ring and moves cyclically in both
/// directions: moving forward from the tail reaches the head, and moving
/// backward from the head reaches the tail. It is created by [`Ring::cursor_head`],
/// which returns `None` for an empty ring.
///
/// # Examples
///
/// ```
/// use cyclic_ring::Ring;
/// use std::iter::FromIterator;
///
/// let ring = Ring::from_iter(['A', 'B', 'C'].iter().copied());
///
/// let mut cursor = ring.cursor_head().unwrap();
/// assert_eq!(cursor.current(), &'A');
/// assert!(cursor.is_head());
///
/// cursor.move_prev();
/// assert_eq!(cursor.current(), &'C');
/// assert!(cursor.is_tail());
///
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.current(), &'B');
/// ```
pub struct Cursor<'a, T: 'a> {
    current: NodeIndex,
    ring: &'a Ring<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Only cursors of the same ring at the same node are considered equal.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ring, other.ring) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(self.ring)
            .field(self.current())
            .finish()
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>, current: NodeIndex) -> Self {
        Self { current, ring }
    }

    pub(crate) fn index(&self) -> NodeIndex {
        self.current
    }

    fn next_index(&self) -> NodeIndex {
        self.ring.node(self.current).next
    }

    fn prev_index(&self) -> NodeIndex {
        self.ring.node(self.current).prev
    }

    /// Provides a reference to the value under the cursor.
    pub fn current(&self) -> &'a T {
        &self.ring.node(self.current).value
    }

    /// Provides a reference to the value after the cursor, which is the
    /// current value itself in a singleton ring.
    pub fn peek_next(&self) -> &'a T {
        &self.ring.node(self.next_index()).value
    }

    /// Provides a reference to the value before the cursor, which is the
    /// current value itself in a singleton ring.
    pub fn peek_prev(&self) -> &'a T {
        &self.ring.node(self.prev_index()).value
    }

    /// Returns `true` if the cursor is at the `head` of the ring.
    pub fn is_head(&self) -> bool {
        self.ring.head_index() == Some(self.current)
    }

    /// Returns `true` if the cursor is at the tail of the ring.
    pub fn is_tail(&self) -> bool {
        self.next_index() == self.ring.head_index().unwrap_or(self.current)
    }

    /// Move the cursor to the next node, wrapping from the tail to the head.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_next(&mut self) {
        self.current = self.next_index();
    }

    /// Move the cursor to the previous node, wrapping from the head to the tail.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_prev(&mut self) {
        self.current = self.prev_index();
    }

    /// Move forward the cursor by given steps, or return an error when the
    /// move would wrap from the tail back to the head.
    ///
    /// If an error occurs, the cursor stays at the tail.
    ///
    /// This operation should compute in *O*(*steps*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::{Ring, RingError};
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter([1, 2, 3].iter().copied());
    /// let mut cursor = ring.cursor_head().unwrap();
    ///
    /// assert!(cursor.seek_forward(2).is_ok());
    /// assert_eq!(cursor.current(), &3);
    ///
    /// let mut cursor = ring.cursor_head().unwrap();
    /// assert_eq!(cursor.seek_forward(3), Err(RingError::OutOfRange));
    /// assert_eq!(cursor.current(), &3);
    /// ```
    pub fn seek_forward(&mut self, steps: usize) -> Result<(), RingError> {
        for _ in 0..steps {
            if self.is_tail() {
                return Err(RingError::OutOfRange);
            }
            self.move_next();
        }
        Ok(())
    }

    /// Move forward the cursor by at most `steps`, stopping early at the tail.
    /// Returns the number of steps actually taken.
    pub(crate) fn seek_forward_to_tail(&mut self, steps: usize) -> usize {
        let mut taken = 0;
        while taken < steps && !self.is_tail() {
            self.move_next();
            taken += 1;
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use crate::{Ring, RingError};
    use std::iter::FromIterator;

    #[test]
    fn cursor_moves_cyclically() {
        let ring = Ring::from_iter(0..4);
        let mut cursor = ring.cursor_head().unwrap();
        for expected in (0..4).cycle().take(9) {
            assert_eq!(cursor.current(), &expected);
            cursor.move_next();
        }
        assert_eq!(cursor.current(), &1);
        for expected in [1, 0, 3, 2, 1].iter() {
            assert_eq!(cursor.current(), expected);
            cursor.move_prev();
        }
    }

    #[test]
    fn cursor_peeks_neighbors() {
        let ring = Ring::from_iter(0..3);
        let mut cursor = ring.cursor_head().unwrap();
        assert_eq!(cursor.peek_prev(), &2);
        assert_eq!(cursor.peek_next(), &1);
        cursor.move_prev();
        assert!(cursor.is_tail());
        assert!(!cursor.is_head());
        assert_eq!(cursor.peek_next(), &0);
    }

    #[test]
    fn cursor_seek() {
        let ring = Ring::from_iter(0..5);
        let mut cursor = ring.cursor_head().unwrap();
        assert_eq!(cursor.seek_forward(0), Ok(()));
        assert!(cursor.is_head());
        assert_eq!(cursor.seek_forward(4), Ok(()));
        assert!(cursor.is_tail());
        assert_eq!(cursor.seek_forward(1), Err(RingError::OutOfRange));
        assert!(cursor.is_tail());

        let mut cursor = ring.cursor_head().unwrap();
        assert_eq!(cursor.seek_forward_to_tail(2), 2);
        assert_eq!(cursor.current(), &2);
        assert_eq!(cursor.seek_forward_to_tail(10), 2);
        assert!(cursor.is_tail());
    }

    #[test]
    fn cursor_eq() {
        let ring = Ring::from_iter(0..3);
        let cursor1 = ring.cursor_head().unwrap();
        let mut cursor2 = cursor1.clone();
        assert_eq!(cursor1, cursor2);

        cursor2.move_next();
        assert_ne!(cursor1, cursor2);

        let another = ring.clone();
        let cursor3 = another.cursor_head().unwrap();
        assert_ne!(cursor1, cursor3);
    }
}
