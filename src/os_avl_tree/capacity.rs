use super::OSAvlTree;
use crate::comparator::Natural;
use crate::raw::RawAvlTree;

impl<T> OSAvlTree<T> {
    /// Creates an empty tree with room for at least `capacity` keys before
    /// its node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree: OSAvlTree<i32> = OSAvlTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C> OSAvlTree<T, C> {
    /// Creates an empty tree ordered by `cmp` with room for at least
    /// `capacity` keys.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        OSAvlTree {
            raw: RawAvlTree::with_capacity(capacity, cmp),
        }
    }

    /// Returns how many keys the tree can hold without reallocating its
    /// node storage.
    ///
    /// Slots released by deletions are reused first, so a tree whose length
    /// stays below its capacity never reallocates.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
