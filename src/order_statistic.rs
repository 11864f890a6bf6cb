/// A zero-based rank into the sorted order of an [`OSAvlTree`](crate::OSAvlTree).
///
/// Keys that compare equal each hold their own rank.
///
/// # Examples
///
/// ```
/// use kstat_tree::{OSAvlTree, Rank};
///
/// let tree = OSAvlTree::from([30, 10, 20]);
///
/// assert_eq!(tree[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
