use crate::ring::{NodeIndex, Ring};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the values of a `Ring`, from `head` to the tail.
///
/// It keeps the not yet visited part of the ring as a closed range
/// `front..=back`, which is empty once both ends have met.
///
/// # Examples
///
/// ```compile_fail
/// use cyclic_ring::Ring;
/// use std::iter::FromIterator;
///
/// let mut ring = Ring::from_iter([1, 2, 3].iter().copied());
/// let mut iter = ring.iter();
///
/// // Won't compile, because ring is already borrowed immutably.
/// ring.insert_at_end(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    ring: &'a Ring<T>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>) -> Self {
        Self {
            ring,
            front: ring.head_index(),
            back: ring.tail_index(),
            #[cfg(feature = "length")]
            len: ring.len(),
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and shrink the range to `front.next..=back`, or return
    /// `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        let front = self.front?;
        let node = self.ring.node(front);
        if self.back == Some(front) {
            self.finish();
        } else {
            self.front = Some(node.next);
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&node.value)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and shrink the range to `front..=back.prev`, or return
    /// `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        let back = self.back?;
        let node = self.ring.node(back);
        if self.front == Some(back) {
            self.finish();
        } else {
            self.back = Some(node.prev);
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&node.value)
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the values of a `Ring`, draining it from `head`.
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.ring).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.delete_at_beginning().ok()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ring.delete_at_end().ok()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// The walking direction of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From `head` along the `next` links.
    Forward,
    /// From the tail along the `prev` links.
    Backward,
}

/// One full walk over a non-empty `Ring`, created by
/// [`Ring::traverse_forward`] and [`Ring::traverse_backward`].
///
/// It yields every value once, and displays as the values separated by
/// single spaces.
///
/// # Examples
///
/// ```
/// use cyclic_ring::{Direction, Ring};
/// use std::iter::FromIterator;
///
/// let ring = Ring::from_iter([1, 2, 3].iter().copied());
/// let traversal = ring.traverse_backward().unwrap();
/// assert_eq!(traversal.direction(), Direction::Backward);
/// assert_eq!(traversal.to_string(), "3 2 1");
/// assert_eq!(Vec::from_iter(traversal.copied()), vec![3, 2, 1]);
/// ```
pub struct Traversal<'a, T: 'a> {
    iter: Iter<'a, T>,
    direction: Direction,
}

impl<'a, T: 'a> Traversal<'a, T> {
    pub(crate) fn new(iter: Iter<'a, T>, direction: Direction) -> Self {
        Self { iter, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<'a, T: 'a> Clone for Traversal<'a, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            direction: self.direction,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Traversal<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("direction", &self.direction)
            .field("values", &self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T: fmt::Display + 'a> fmt::Display for Traversal<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.clone();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

impl<'a, T: 'a> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Forward => self.iter.next(),
            Direction::Backward => self.iter.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Traversal<'a, T> {}

impl<'a, T: 'a> FusedIterator for Traversal<'a, T> {}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ring: self }
    }
}

impl<'a, T: 'a> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

/// Appends every value at the end of the ring.
impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.insert_at_end(value));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Ring<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::Ring;
    use std::iter::FromIterator;

    #[test]
    fn iter_both_ends() {
        let ring = Ring::from_iter(0..5);
        let mut iter = ring.iter();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_empty_and_singleton() {
        let empty: Ring = Ring::new();
        assert_eq!(empty.iter().next(), None);

        let singleton = Ring::from_iter(Some(1));
        let mut iter = singleton.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(singleton.iter().last(), Some(&1));
    }

    #[test]
    fn traversal_round_trip() {
        let mut ring = Ring::from_iter(0..6);
        ring.rotate_forward();
        ring.rotate_forward();
        let forward = Vec::from_iter(ring.traverse_forward().unwrap().copied());
        let mut backward = Vec::from_iter(ring.traverse_backward().unwrap().copied());
        backward.reverse();
        assert_eq!(forward, vec![2, 3, 4, 5, 0, 1]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn traversal_display() {
        let ring = Ring::from_iter(Some(-3));
        assert_eq!(ring.traverse_forward().unwrap().to_string(), "-3");
        assert_eq!(ring.traverse_backward().unwrap().to_string(), "-3");

        let ring = Ring::from_iter(vec![10, 20, 25, 30]);
        assert_eq!(ring.traverse_forward().unwrap().to_string(), "10 20 25 30");
        assert_eq!(ring.traverse_backward().unwrap().to_string(), "30 25 20 10");
    }

    #[test]
    fn into_iter_drains_from_both_ends() {
        let ring = Ring::from_iter(0..4);
        let mut iter = ring.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(Vec::from_iter(iter), vec![1, 2]);
    }

    #[test]
    fn extend_appends_at_end() {
        let mut ring = Ring::from_iter(0..2);
        ring.extend(&[2, 3]);
        ring.extend(vec![4]);
        assert_eq!(Vec::from_iter(&ring), vec![&0, &1, &2, &3, &4]);
        assert_eq!(format!("{:?}", ring), "[0, 1, 2, 3, 4]");
    }
}
