use core::ops::Index;

use super::OSAvlTree;
use crate::Rank;
use crate::comparator::Comparator;

impl<T, C> OSAvlTree<T, C> {
    /// Returns the key at zero-based position `k` in sorted order.
    ///
    /// Keys that compare equal each occupy their own position.
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.len()`. Use [`get_by_rank`](Self::get_by_rank) to
    /// query a position that may be out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree = OSAvlTree::from([5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(tree.find_stat(0), &1);
    /// assert_eq!(tree.find_stat(3), &5);
    /// assert_eq!(tree.find_stat(6), &9);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find_stat(&self, k: usize) -> &T {
        let len = self.len();
        assert!(k < len, "`OSAvlTree::find_stat()` - rank {k} out of range for {len} keys");
        match self.raw.get_by_rank(k) {
            Some(key) => key,
            None => unreachable!("`OSAvlTree::find_stat()` - subtree sizes disagree with len"),
        }
    }

    /// Returns the key at zero-based position `rank` in sorted order, or
    /// `None` if `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree = OSAvlTree::from([10, 20, 30]);
    /// assert_eq!(tree.get_by_rank(1), Some(&20));
    /// assert!(tree.get_by_rank(3).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.raw.get_by_rank(rank)
    }
}

impl<T, C: Comparator<T>> OSAvlTree<T, C> {
    /// Returns the zero-based rank of the first key equal to `key`, i.e. the
    /// number of stored keys strictly less than it, or `None` if no equal key
    /// is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree = OSAvlTree::from([10, 20, 20, 30]);
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&30), Some(3));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank_of(&self, key: &T) -> Option<usize> {
        self.raw.rank_of(key)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use kstat_tree::{OSAvlTree, Rank};
///
/// let tree = OSAvlTree::from([10, 20, 30]);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
impl<T, C> Index<Rank> for OSAvlTree<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.find_stat(rank.0)
    }
}
