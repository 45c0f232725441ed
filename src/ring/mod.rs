use std::fmt::{Debug, Formatter};

use tracing::{debug, trace};

use crate::ring::cursor::Cursor;
use crate::ring::iterator::{Direction, Traversal};
use crate::{Iter, RingError};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `Ring` is a circular doubly-linked list anchored at a `head` node.
///
/// Every node links forward (`next`) and backward (`prev`), and the last node
/// links back to the first, so there is no null terminator anywhere: the tail
/// is always `head.prev`.
///
/// Nodes live in an arena of slots and refer to each other by slot index.
/// A removed node vacates its slot, which is threaded onto a free list and
/// reused by the next insertion.
///
/// The `Ring` contains:
/// - the arena `slots` and the head of its free list;
/// - the `head` index, `None` if and only if the ring is empty;
/// - a length field `len` indicating the number of nodes. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// cyclic_ring = { default-features = false }
/// ```
///
/// # Positions
///
/// Positional operations count from 1, where position 1 is the `head`.
/// Position 0 is always rejected with [`RingError::InvalidPosition`].
pub struct Ring<T = i32> {
    slots: Vec<Slot<T>>,
    free: Option<NodeIndex>,
    head: Option<NodeIndex>,
    #[cfg(feature = "length")]
    /// the number of nodes in the ring
    pub(crate) len: usize,
}

/// Index of a slot in the arena of a `Ring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

pub(crate) struct Node<T> {
    pub(crate) next: NodeIndex,
    pub(crate) prev: NodeIndex,
    pub(crate) value: T,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

// private methods
impl<T> Ring<T> {
    pub(crate) fn head_index(&self) -> Option<NodeIndex> {
        self.head
    }

    pub(crate) fn tail_index(&self) -> Option<NodeIndex> {
        self.head.map(|head| self.node(head).prev)
    }

    pub(crate) fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {} is linked into the ring", index.0),
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {} is linked into the ring", index.0),
        }
    }

    /// Create a singleton node holding `value`, reusing a vacant slot when
    /// there is one. The node is not linked into the ring yet.
    fn allocate(&mut self, value: T) -> NodeIndex {
        let index = match self.free {
            Some(index) => {
                self.free = match &self.slots[index.0] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot {} on the free list", index.0),
                };
                index
            }
            None => {
                self.slots.push(Slot::Vacant { next_free: None });
                NodeIndex(self.slots.len() - 1)
            }
        };
        self.slots[index.0] = Slot::Occupied(Node {
            next: index,
            prev: index,
            value,
        });
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        trace!(slot = index.0, "allocated node");
        index
    }

    /// Vacate the slot of an already unlinked node and return its value.
    fn release(&mut self, index: NodeIndex) -> T {
        let slot = std::mem::replace(
            &mut self.slots[index.0],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(index);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        trace!(slot = index.0, "released node");
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("released slot {} twice", index.0),
        }
    }

    fn connect(&mut self, prev: NodeIndex, next: NodeIndex) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    /// Splice the singleton `node` in between `prev` and `prev.next`.
    fn attach_after(&mut self, prev: NodeIndex, node: NodeIndex) {
        let next = self.node(prev).next;
        #[cfg(debug_assertions)]
        assert_adjacent(self, prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(self, prev, node);
            assert_adjacent(self, node, next);
        }
        trace!(prev = prev.0, node = node.0, next = next.0, "attached node");
    }

    /// Create a node for `value` and splice it in between the tail and `head`,
    /// so that it becomes the new tail. An empty ring gets it as its singleton
    /// head.
    fn attach_before_head(&mut self, value: T) -> NodeIndex {
        let node = self.allocate(value);
        match self.tail_index() {
            Some(tail) => self.attach_after(tail, node),
            None => self.head = Some(node),
        }
        node
    }

    /// Splice `node` out of the ring and release it.
    ///
    /// `head` moves on to `head.next` if `node` was the head, and becomes `None`
    /// if `node` was the only node.
    fn detach(&mut self, node: NodeIndex) -> T {
        let (prev, next) = {
            let node = self.node(node);
            (node.prev, node.next)
        };
        if next == node {
            self.head = None;
        } else {
            if self.head == Some(node) {
                self.head = Some(next);
            }
            self.connect(prev, next);
            #[cfg(debug_assertions)]
            assert_adjacent(self, prev, next);
        }
        trace!(prev = prev.0, node = node.0, next = next.0, "detached node");
        self.release(node)
    }

    /// Check every ring invariant, panicking on the first violation.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let owned = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        #[cfg(feature = "length")]
        assert_eq!(owned, self.len, "`len` must count every owned node");
        let head = match self.head {
            Some(head) => head,
            None => {
                assert_eq!(owned, 0, "an empty ring must not own any node");
                return;
            }
        };
        let mut reached = 0;
        let mut current = head;
        loop {
            let node = self.node(current);
            assert_eq!(
                self.node(node.next).prev,
                current,
                "`next.prev` of node {} must link back to it",
                current.0
            );
            assert_eq!(
                self.node(node.prev).next,
                current,
                "`prev.next` of node {} must link back to it",
                current.0
            );
            reached += 1;
            assert!(
                reached <= owned,
                "following `next` from the head never returns to the head"
            );
            current = node.next;
            if current == head {
                break;
            }
        }
        assert_eq!(reached, owned, "every owned node must be reachable from the head");
    }
}

impl<T> Ring<T> {
    /// Create an empty `Ring`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_ring::Ring;
    /// let ring: Ring<u32> = Ring::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `Ring` with room for `capacity` nodes before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            head: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `Ring` has no nodes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes in the `Ring`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// ring.insert_at_end(2);
    /// ring.insert_at_beginning(1);
    /// assert_eq!(ring.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of nodes in the `Ring`, counted by walking it once.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes every node from the `Ring` at once.
    ///
    /// The arena keeps its allocation, so refilling the ring does not reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let mut ring = Ring::from_iter([1, 2, 3].iter().copied());
    /// ring.clear();
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.head(), None);
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        #[cfg(feature = "length")]
        {
            self.len = 0;
        }
        trace!("cleared ring");
    }

    /// Provides a reference to the value at `head`, or `None` if the ring is empty.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|head| &self.node(head).value)
    }

    /// Provides a mutable reference to the value at `head`, or `None` if the
    /// ring is empty.
    pub fn head_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(head) => Some(&mut self.node_mut(head).value),
            None => None,
        }
    }

    /// Provides a reference to the value at the tail (`head.prev`), or `None`
    /// if the ring is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.tail(), None);
    ///
    /// ring.insert_at_beginning(1);
    /// assert_eq!(ring.tail(), Some(&1));
    /// ring.insert_at_beginning(0);
    /// assert_eq!(ring.tail(), Some(&1));
    /// ```
    pub fn tail(&self) -> Option<&T> {
        self.tail_index().map(|tail| &self.node(tail).value)
    }

    /// Provides a mutable reference to the value at the tail, or `None` if the
    /// ring is empty.
    pub fn tail_mut(&mut self) -> Option<&mut T> {
        match self.tail_index() {
            Some(tail) => Some(&mut self.node_mut(tail).value),
            None => None,
        }
    }

    /// Inserts `value` as the new `head`, right after the old tail.
    ///
    /// The old head, if any, becomes the second node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// ring.insert_at_beginning(2);
    /// ring.insert_at_beginning(1);
    /// assert_eq!(ring.head(), Some(&1));
    /// assert_eq!(ring.tail(), Some(&2));
    /// ```
    pub fn insert_at_beginning(&mut self, value: T) {
        let node = self.attach_before_head(value);
        self.head = Some(node);
    }

    /// Inserts `value` as the new tail, right before `head`. `head` is left
    /// where it is, unless the ring was empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// ring.insert_at_end(1);
    /// ring.insert_at_end(2);
    /// assert_eq!(ring.head(), Some(&1));
    /// assert_eq!(ring.tail(), Some(&2));
    /// ```
    pub fn insert_at_end(&mut self, value: T) {
        self.attach_before_head(value);
    }

    /// Inserts `value` so that it ends up at the 1-based `position`.
    ///
    /// Position 1, or any position on an empty ring, inserts at the beginning.
    /// A position past the end of the ring does not fail: the walk towards it
    /// stops at the tail and the value is appended there.
    ///
    /// # Errors
    ///
    /// [`RingError::InvalidPosition`] if `position` is 0. The ring is unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*position*, *n*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::{Ring, RingError};
    /// use std::iter::FromIterator;
    ///
    /// let mut ring = Ring::from_iter([10, 20, 30].iter().copied());
    /// assert_eq!(ring.insert_at_position(25, 3), Ok(()));
    /// assert_eq!(ring.insert_at_position(99, 0), Err(RingError::InvalidPosition));
    /// assert_eq!(ring.insert_at_position(40, 100), Ok(()));
    /// assert_eq!(Vec::from_iter(ring), vec![10, 20, 25, 30, 40]);
    /// ```
    pub fn insert_at_position(&mut self, value: T, position: usize) -> Result<(), RingError> {
        if position == 0 {
            debug!(position, "rejected insertion: {}", RingError::InvalidPosition);
            return Err(RingError::InvalidPosition);
        }
        let head = match self.head {
            Some(head) if position > 1 => head,
            _ => {
                self.insert_at_beginning(value);
                return Ok(());
            }
        };
        let steps = position - 2;
        let mut cursor = Cursor::new(self, head);
        if cursor.seek_forward_to_tail(steps) < steps {
            debug!(position, "insertion position is past the tail, appending");
        }
        let anchor = cursor.index();
        let node = self.allocate(value);
        self.attach_after(anchor, node);
        Ok(())
    }

    /// Removes the `head` and returns its value. The next node becomes the head.
    ///
    /// # Errors
    ///
    /// [`RingError::Empty`] if the ring has no nodes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::{Ring, RingError};
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.delete_at_beginning(), Err(RingError::Empty));
    ///
    /// ring.insert_at_end(1);
    /// ring.insert_at_end(2);
    /// assert_eq!(ring.delete_at_beginning(), Ok(1));
    /// assert_eq!(ring.head(), Some(&2));
    /// ```
    pub fn delete_at_beginning(&mut self) -> Result<T, RingError> {
        match self.head {
            Some(head) => Ok(self.detach(head)),
            None => {
                debug!("rejected deletion at beginning: {}", RingError::Empty);
                Err(RingError::Empty)
            }
        }
    }

    /// Removes the tail and returns its value.
    ///
    /// # Errors
    ///
    /// [`RingError::Empty`] if the ring has no nodes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// ring.insert_at_end(1);
    /// ring.insert_at_end(2);
    /// assert_eq!(ring.delete_at_end(), Ok(2));
    /// assert_eq!(ring.tail(), Some(&1));
    /// ```
    pub fn delete_at_end(&mut self) -> Result<T, RingError> {
        match self.tail_index() {
            Some(tail) => Ok(self.detach(tail)),
            None => {
                debug!("rejected deletion at end: {}", RingError::Empty);
                Err(RingError::Empty)
            }
        }
    }

    /// Removes the node at the 1-based `position` and returns its value.
    ///
    /// # Errors
    ///
    /// - [`RingError::InvalidPosition`] if `position` is 0 or the ring is empty;
    /// - [`RingError::OutOfRange`] if `position` is past the tail.
    ///
    /// The ring is unchanged on error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*position*, *n*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::{Ring, RingError};
    /// use std::iter::FromIterator;
    ///
    /// let mut ring = Ring::from_iter([1, 2, 3].iter().copied());
    /// assert_eq!(ring.delete_at_position(4), Err(RingError::OutOfRange));
    /// assert_eq!(ring.delete_at_position(2), Ok(2));
    /// assert_eq!(Vec::from_iter(ring), vec![1, 3]);
    /// ```
    pub fn delete_at_position(&mut self, position: usize) -> Result<T, RingError> {
        let head = match self.head {
            Some(head) if position > 0 => head,
            _ => {
                debug!(position, "rejected deletion: {}", RingError::InvalidPosition);
                return Err(RingError::InvalidPosition);
            }
        };
        if position == 1 {
            return self.delete_at_beginning();
        }
        let mut cursor = Cursor::new(self, head);
        if let Err(err) = cursor.seek_forward(position - 1) {
            debug!(position, "rejected deletion: {}", err);
            return Err(err);
        }
        let target = cursor.index();
        Ok(self.detach(target))
    }

    /// Moves `head` one node forward, so the old head becomes the tail.
    /// No link is touched. Does nothing on an empty ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let mut ring = Ring::from_iter([1, 2, 3].iter().copied());
    /// ring.rotate_forward();
    /// assert_eq!(Vec::from_iter(ring.iter().copied()), vec![2, 3, 1]);
    /// ring.rotate_backward();
    /// assert_eq!(Vec::from_iter(ring.iter().copied()), vec![1, 2, 3]);
    /// ```
    pub fn rotate_forward(&mut self) {
        if let Some(head) = self.head {
            self.head = Some(self.node(head).next);
        }
    }

    /// Moves `head` one node backward, so the old tail becomes the head.
    /// No link is touched. Does nothing on an empty ring.
    pub fn rotate_backward(&mut self) {
        self.head = self.tail_index();
    }

    /// Provides a cursor at `head`, or `None` if the ring is empty.
    pub fn cursor_head(&self) -> Option<Cursor<'_, T>> {
        self.head.map(|head| Cursor::new(self, head))
    }

    /// Provides a forward iterator starting at `head`. It is double-ended, so
    /// `iter().rev()` walks from the tail backwards.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Walks every value once, from `head` along the `next` links.
    ///
    /// The returned [`Traversal`] displays as the space-separated values.
    ///
    /// # Errors
    ///
    /// [`RingError::Empty`] if the ring has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::{Ring, RingError};
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter([20, 40, 50].iter().copied());
    /// assert_eq!(ring.traverse_forward().unwrap().to_string(), "20 40 50");
    ///
    /// let empty: Ring = Ring::new();
    /// assert_eq!(empty.traverse_forward().unwrap_err(), RingError::Empty);
    /// ```
    pub fn traverse_forward(&self) -> Result<Traversal<'_, T>, RingError> {
        self.traverse(Direction::Forward)
    }

    /// Walks every value once, from the tail along the `prev` links.
    ///
    /// # Errors
    ///
    /// [`RingError::Empty`] if the ring has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter([20, 40, 50].iter().copied());
    /// assert_eq!(ring.traverse_backward().unwrap().to_string(), "50 40 20");
    /// ```
    pub fn traverse_backward(&self) -> Result<Traversal<'_, T>, RingError> {
        self.traverse(Direction::Backward)
    }

    fn traverse(&self, direction: Direction) -> Result<Traversal<'_, T>, RingError> {
        if self.is_empty() {
            debug!(?direction, "rejected traversal: {}", RingError::Empty);
            return Err(RingError::Empty);
        }
        Ok(Traversal::new(self.iter(), direction))
    }
}

impl<T: Debug> Debug for Ring<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(ring: &Ring<T>, prev: NodeIndex, next: NodeIndex) {
    assert_eq!(ring.node(prev).next, next);
    assert_eq!(ring.node(next).prev, prev);
}
