//! Key ordering injected into an [`OSAvlTree`](crate::OSAvlTree).
//!
//! The tree never compares keys on its own; every descent asks its
//! [`Comparator`]. The default, [`Natural`], defers to the key's [`Ord`]
//! implementation, and any `Fn(&T, &T) -> Ordering` closure works as well.

use core::cmp::Ordering;

/// A three-way total order over `T`.
///
/// Implementations must be consistent for the lifetime of a tree: if the
/// relative order of two stored keys changes, lookups and ranks become
/// unspecified (but never unsafe).
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use kstat_tree::OSAvlTree;
///
/// // Order strings by length only.
/// let mut tree = OSAvlTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// tree.insert("ccc").insert("a").insert("bb");
/// assert_eq!(tree.find_stat(0), &"a");
/// assert_eq!(tree.find_stat(2), &"ccc");
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns how `left` orders relative to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Ascending order by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

/// Descending order by [`Ord`].
///
/// ```
/// use kstat_tree::OSAvlTree;
/// use kstat_tree::comparator::Reverse;
///
/// let mut tree = OSAvlTree::with_comparator(Reverse);
/// tree.extend([1, 3, 2]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized + Ord> Comparator<T> for Reverse {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
