use crate::ring::{NodeIndex, Ring};
use crate::RingError;
use std::hash::{Hash, Hasher};
use tracing::debug;

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        let mut ring = Ring::with_capacity(self.len());
        ring.extend(self.iter().cloned());
        ring
    }
}

impl<T: Hash> Hash for Ring<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> Ring<T> {
    /// Walk one full cycle from `head` and return the first node whose value
    /// satisfies `predicate`.
    pub(crate) fn find_index<F>(&self, mut predicate: F) -> Option<NodeIndex>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_head()?;
        loop {
            if predicate(cursor.current()) {
                return Some(cursor.index());
            }
            cursor.move_next();
            if cursor.is_head() {
                return None;
            }
        }
    }

    /// Returns `true` if some node of the `Ring` holds a value equal to `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert!(!ring.search(&0));
    ///
    /// ring.insert_at_end(0);
    /// ring.insert_at_end(1);
    ///
    /// assert!(ring.search(&1));
    /// assert!(!ring.search(&10));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_index(|elt| elt == value).is_some()
    }

    /// Removes the first node, counting from `head`, that holds a value equal
    /// to `value`, and returns the removed value. Later duplicates stay.
    ///
    /// Removing the head moves `head` to the next node.
    ///
    /// # Errors
    ///
    /// [`RingError::NotFound`] if no node matches, including on an empty ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_ring::{Ring, RingError};
    /// use std::iter::FromIterator;
    ///
    /// let mut ring = Ring::from_iter([20, 25, 20].iter().copied());
    /// assert_eq!(ring.delete_by_value(&20), Ok(20));
    /// assert_eq!(ring.delete_by_value(&30), Err(RingError::NotFound));
    /// assert_eq!(Vec::from_iter(ring), vec![25, 20]);
    /// ```
    pub fn delete_by_value(&mut self, value: &T) -> Result<T, RingError>
    where
        T: PartialEq,
    {
        match self.find_index(|elt| elt == value) {
            Some(found) if Some(found) == self.head_index() => self.delete_at_beginning(),
            Some(found) if Some(found) == self.tail_index() => self.delete_at_end(),
            Some(found) => Ok(self.detach(found)),
            None => {
                debug!("rejected deletion by value: {}", RingError::NotFound);
                Err(RingError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Ring;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of(ring: &Ring) -> u64 {
        let mut hasher = DefaultHasher::new();
        ring.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn ring_eq_follows_head_order() {
        let ring = Ring::from_iter(0..3);
        let mut rotated = Ring::from_iter(vec![2, 0, 1]);
        assert_ne!(ring, rotated);
        rotated.rotate_forward();
        assert_eq!(ring, rotated);
        assert_eq!(hash_of(&ring), hash_of(&rotated));
        assert_ne!(ring, Ring::from_iter(0..4));
    }

    #[test]
    fn ring_clone_is_independent() {
        let mut ring = Ring::from_iter(0..3);
        let cloned = ring.clone();
        assert_eq!(ring.delete_at_beginning(), Ok(0));
        assert_eq!(Vec::from_iter(cloned.iter().copied()), vec![0, 1, 2]);
        cloned.assert_valid();
    }

    #[test]
    fn ring_search_after_deletions() {
        let mut ring = Ring::from_iter(vec![5, 6, 5]);
        assert!(ring.search(&5));
        assert_eq!(ring.delete_by_value(&5), Ok(5));
        assert!(ring.search(&5));
        assert_eq!(ring.delete_by_value(&5), Ok(5));
        assert!(!ring.search(&5));
        assert!(ring.search(&6));
        ring.assert_valid();
    }

    #[test]
    fn ring_delete_by_value_at_tail() {
        let mut ring = Ring::from_iter(1..=3);
        assert_eq!(ring.delete_by_value(&3), Ok(3));
        assert_eq!(ring.tail(), Some(&2));
        assert_eq!(ring.head(), Some(&1));
        ring.assert_valid();
    }
}
