use core::fmt;
use core::iter::FusedIterator;

use crate::comparator::{Comparator, Natural};
use crate::error::{Error, Result};
use crate::raw::{InOrder, RawAvlTree};

mod capacity;
mod order_statistic;

/// An ordered multiset based on a height-balanced (AVL) binary search tree,
/// augmented with subtree sizes for order-statistic queries.
///
/// Keys are ordered by the tree's [`Comparator`] (by default [`Natural`], i.e.
/// the key's [`Ord`] implementation). Keys that compare equal are all retained:
/// inserting a key that is already present stores a second copy, and
/// [`delete`](OSAvlTree::delete) removes one copy at a time.
///
/// Every mutating operation keeps the tree balanced, so insertion, deletion,
/// lookup, [`find_min`](OSAvlTree::find_min)/[`find_max`](OSAvlTree::find_max)
/// and [`find_stat`](OSAvlTree::find_stat) all take O(log n) time.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key, as determined by the comparator, changes while it
/// is in the tree. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `OSAvlTree` that observed the
/// logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use kstat_tree::OSAvlTree;
///
/// let mut tree = OSAvlTree::new();
/// tree.insert(5).insert(3).insert(8).insert(3);
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.find_min(), Ok(&3));
/// assert_eq!(tree.find_stat(2), &5);
///
/// tree.delete(&3);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 8]);
/// ```
pub struct OSAvlTree<T, C = Natural> {
    raw: RawAvlTree<T, C>,
}

/// An iterator over the keys of an `OSAvlTree`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OSAvlTree`].
///
/// # Examples
///
/// ```
/// use kstat_tree::OSAvlTree;
///
/// let tree = OSAvlTree::from([3, 1, 2]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OSAvlTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: InOrder<'a, T>,
}

/// An owning iterator over the keys of an `OSAvlTree`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`OSAvlTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: OSAvlTree#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> OSAvlTree<T> {
    /// Makes a new, empty `OSAvlTree` ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::new();
    /// tree.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> OSAvlTree<T, C> {
    /// Makes a new, empty `OSAvlTree` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.find_min(), Ok(&3));
    /// ```
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        OSAvlTree {
            raw: RawAvlTree::new(cmp),
        }
    }

    /// Returns a reference to the comparator ordering this tree.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of keys in the tree, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1).insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no keys.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single key.
    ///
    /// The height never exceeds about `1.44 * log2(len + 2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree: OSAvlTree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every key, releasing all nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::from([1, 2, 3]);
    /// tree.clear().insert(9);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) -> &mut Self {
        self.raw.clear();
        self
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::{Error, OSAvlTree};
    ///
    /// let mut tree = OSAvlTree::new();
    /// assert_eq!(tree.find_min(), Err(Error::EmptyContainer));
    /// tree.insert(4).insert(2);
    /// assert_eq!(tree.find_min(), Ok(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn find_min(&self) -> Result<&T> {
        self.raw.first().ok_or(Error::EmptyContainer)
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn find_max(&self) -> Result<&T> {
        self.raw.last().ok_or(Error::EmptyContainer)
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Returns the largest number of keys stored on any single level of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree = OSAvlTree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(tree.max_width(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.raw.max_width()
    }

    /// Gets a double-ended iterator that visits the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree = OSAvlTree::from([3, 1, 3]);
    /// let keys: Vec<_> = tree.iter().collect();
    /// assert_eq!(keys, [&1, &3, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.raw.in_order(),
        }
    }
}

impl<T, C: Comparator<T>> OSAvlTree<T, C> {
    /// Inserts `key` and returns the tree for chaining.
    ///
    /// Insertion always succeeds: a key equal to one already present is stored
    /// alongside it.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX - 1` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::new();
    /// tree.insert(2).insert(2).insert(1);
    /// assert_eq!(tree.count(&2), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: T) -> &mut Self {
        self.raw.insert(key);
        self
    }

    /// Removes one key equal to `key`, if any, and returns the tree for chaining.
    ///
    /// Deleting a key that is not present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::from([10, 20, 30]);
    /// tree.delete(&20).delete(&99);
    /// assert!(!tree.contains(&20));
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete(&mut self, key: &T) -> &mut Self {
        self.raw.remove(key);
        self
    }

    /// Removes one key equal to `key` and reports whether one was found.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn try_delete(&mut self, key: &T) -> bool {
        self.raw.remove(key).is_some()
    }

    /// Removes one key equal to `key` and returns the stored key.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let mut tree = OSAvlTree::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'a'));
    /// assert_eq!(tree.take(&(1, '?')), Some((1, 'a')));
    /// assert_eq!(tree.take(&(1, '?')), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take(&mut self, key: &T) -> Option<T> {
        self.raw.remove(key)
    }

    /// Returns `true` if the tree holds a key equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.raw.contains(key)
    }

    /// Returns how many stored keys compare equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn count(&self, key: &T) -> usize {
        self.raw.count(key)
    }
}

impl<T: Clone, C: Clone> Clone for OSAvlTree<T, C> {
    fn clone(&self) -> Self {
        OSAvlTree {
            raw: self.raw.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OSAvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for OSAvlTree<T, C> {
    fn default() -> Self {
        OSAvlTree::with_comparator(C::default())
    }
}

/// Two trees are equal when they hold the same keys in the same order,
/// regardless of shape or comparator.
impl<T: PartialEq, C> PartialEq for OSAvlTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for OSAvlTree<T, C> {}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OSAvlTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OSAvlTree::default();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for OSAvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for OSAvlTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OSAvlTree<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, C> IntoIterator for OSAvlTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Moves the keys out in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kstat_tree::OSAvlTree;
    ///
    /// let tree = OSAvlTree::from([2, 1, 2]);
    /// let v: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(v, [1, 2, 2]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OSAvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
