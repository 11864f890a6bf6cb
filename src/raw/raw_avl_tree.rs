use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{AvlNode, Side};
use super::size::Size;
use crate::comparator::Comparator;

/// The core AVL implementation backing `OSAvlTree`.
#[derive(Clone)]
pub(crate) struct RawAvlTree<T, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<AvlNode<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Ordering used for every descent.
    cmp: C,
}

/// Path element for tracking traversal during mutations.
#[derive(Clone, Copy, Debug)]
struct PathElement {
    /// Handle to the node at this level.
    node: Handle,
    /// Child link we descended through.
    side: Side,
}

/// Stack of ancestors from the root down to the point of mutation.
///
/// An AVL tree over `u32` handles is at most 46 levels deep, so the inline
/// buffer only spills for very large trees.
type Path = SmallVec<[PathElement; 32]>;

/// Stack of nodes whose key has not been yielded yet.
type Stack = SmallVec<[Handle; 32]>;

impl<T, C> RawAvlTree<T, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            cmp,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            cmp,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of keys, read from the root's cached size.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root).to_usize()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree, 0 when empty.
    pub(crate) fn height(&self) -> usize {
        usize::from(self.height_of(self.root))
    }

    /// Releases every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the smallest key.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        Some(self.nodes.get(current).key())
    }

    /// Returns the largest key.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        Some(self.nodes.get(current).key())
    }

    /// Returns the key at zero-based position `rank` in sorted order.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len() {
            return None;
        }

        let mut rank = rank;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let left_size = self.size_of(node.left()).to_usize();
            match rank.cmp(&left_size) {
                Less => current = node.left(),
                Equal => return Some(node.key()),
                Greater => {
                    rank -= left_size + 1;
                    current = node.right();
                }
            }
        }

        None
    }

    /// Returns the largest number of nodes found on a single level.
    pub(crate) fn max_width(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut widest = 0;
        let mut level = vec![root];
        let mut next = Vec::new();
        while !level.is_empty() {
            widest = widest.max(level.len());
            for &handle in &level {
                let node = self.nodes.get(handle);
                next.extend(node.left());
                next.extend(node.right());
            }
            level.clear();
            core::mem::swap(&mut level, &mut next);
        }

        widest
    }

    /// Returns an in-order cursor over the keys.
    pub(crate) fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.nodes, self.root, self.len())
    }

    /// Moves every key out in ascending order, leaving the tree empty.
    /// This is O(n) as it avoids rebalancing, unlike repeated removal.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut stack = Stack::new();
        let mut current = self.root.take();

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left();
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            let node = self.nodes.take(handle);
            current = node.right();
            keys.push(node.into_key());
        }

        self.nodes.clear();
        keys
    }

    #[inline]
    fn height_of(&self, node: Option<Handle>) -> u8 {
        node.map_or(0, |handle| self.nodes.get(handle).height())
    }

    #[inline]
    fn size_of(&self, node: Option<Handle>) -> Size {
        node.map_or(Size::ZERO, |handle| self.nodes.get(handle).size())
    }

    /// Recomputes height and size of `handle` from its children.
    fn refresh(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        let height = 1 + self.height_of(left).max(self.height_of(right));
        let size = Size::joined(self.size_of(left), self.size_of(right));
        self.nodes.get_mut(handle).set_metrics(height, size);
    }

    /// `height(right) - height(left)`.
    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.height_of(node.right())) - i16::from(self.height_of(node.left()))
    }

    /// Lifts the left child of `pivot` above it and returns the new subtree root.
    fn rotate_right(&mut self, pivot: Handle) -> Handle {
        let lifted = self.nodes.get(pivot).left().expect("`rotate_right()` - pivot has no left child!");
        let inner = self.nodes.get(lifted).right();

        self.nodes.get_mut(pivot).set_left(inner);
        self.refresh(pivot);
        self.nodes.get_mut(lifted).set_right(Some(pivot));
        self.refresh(lifted);

        lifted
    }

    /// Lifts the right child of `pivot` above it and returns the new subtree root.
    fn rotate_left(&mut self, pivot: Handle) -> Handle {
        let lifted = self.nodes.get(pivot).right().expect("`rotate_left()` - pivot has no right child!");
        let inner = self.nodes.get(lifted).left();

        self.nodes.get_mut(pivot).set_right(inner);
        self.refresh(pivot);
        self.nodes.get_mut(lifted).set_left(Some(pivot));
        self.refresh(lifted);

        lifted
    }

    /// Restores the AVL property at `handle`, whose children are already balanced,
    /// and returns the root of the resulting subtree.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.refresh(handle);

        match self.balance_factor(handle) {
            2 => {
                let right = self.nodes.get(handle).right().expect("`rebalance()` - right-heavy node has no right child!");
                if self.balance_factor(right) < 0 {
                    let right = self.rotate_right(right);
                    self.nodes.get_mut(handle).set_right(Some(right));
                }
                self.rotate_left(handle)
            }
            -2 => {
                let left = self.nodes.get(handle).left().expect("`rebalance()` - left-heavy node has no left child!");
                if self.balance_factor(left) > 0 {
                    let left = self.rotate_left(left);
                    self.nodes.get_mut(handle).set_left(Some(left));
                }
                self.rotate_right(handle)
            }
            factor => {
                debug_assert!(factor.abs() <= 1, "`rebalance()` - balance factor {factor} out of reach");
                handle
            }
        }
    }

    /// Reattaches `child` below the last path element and rebalances every
    /// ancestor on the way back to the root.
    fn rebuild_path(&mut self, path: &Path, child: Option<Handle>) {
        let mut child = child;
        for step in path.iter().rev() {
            self.nodes.get_mut(step.node).set_child(step.side, child);
            child = Some(self.rebalance(step.node));
        }
        self.root = child;
    }
}

impl<T, C: Comparator<T>> RawAvlTree<T, C> {
    /// Searches for a node holding a key equal to `key`.
    fn search(&self, key: &T) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.cmp.compare(key, node.key()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns true if the tree holds at least one key equal to `key`.
    pub(crate) fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `key`. Keys equal to an existing one descend to its right.
    pub(crate) fn insert(&mut self, key: T) {
        let mut path = Path::new();
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = match self.cmp.compare(&key, node.key()) {
                Less => Side::Left,
                Equal | Greater => Side::Right,
            };
            path.push(PathElement {
                node: handle,
                side,
            });
            current = node.child(side);
        }

        // Allocate before relinking so a failed allocation leaves the tree untouched.
        let leaf = self.nodes.alloc(AvlNode::leaf(key));
        self.rebuild_path(&path, Some(leaf));
    }

    /// Removes one key equal to `key` and returns it.
    pub(crate) fn remove(&mut self, key: &T) -> Option<T> {
        let mut path = Path::new();
        let mut current = self.root;

        let target = loop {
            let handle = current?;
            let node = self.nodes.get(handle);
            let side = match self.cmp.compare(key, node.key()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => break handle,
            };
            path.push(PathElement {
                node: handle,
                side,
            });
            current = node.child(side);
        };

        let node = self.nodes.get(target);
        let (removed, replacement) = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                // Two children: the in-order successor gives up its key and its
                // slot; the target node itself stays in place on the path.
                path.push(PathElement {
                    node: target,
                    side: Side::Right,
                });
                let mut successor = right;
                while let Some(left) = self.nodes.get(successor).left() {
                    path.push(PathElement {
                        node: successor,
                        side: Side::Left,
                    });
                    successor = left;
                }

                let successor = self.nodes.take(successor);
                let orphan = successor.right();
                let removed = self.nodes.get_mut(target).replace_key(successor.into_key());
                (removed, orphan)
            }
            (only, None) | (None, only) => (self.nodes.take(target).into_key(), only),
        };

        self.rebuild_path(&path, replacement);
        Some(removed)
    }

    /// Number of keys strictly less than `key`, and whether an equal key exists.
    fn lower_rank(&self, key: &T) -> (usize, bool) {
        let mut rank = 0;
        let mut found = false;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match self.cmp.compare(key, node.key()) {
                Greater => {
                    rank += self.size_of(node.left()).to_usize() + 1;
                    current = node.right();
                }
                ordering => {
                    found |= ordering == Equal;
                    current = node.left();
                }
            }
        }

        (rank, found)
    }

    /// Number of keys less than or equal to `key`.
    fn upper_rank(&self, key: &T) -> usize {
        let mut rank = 0;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.cmp.compare(key, node.key()) == Less {
                current = node.left();
            } else {
                rank += self.size_of(node.left()).to_usize() + 1;
                current = node.right();
            }
        }

        rank
    }

    /// Returns the rank of the first key equal to `key`.
    pub(crate) fn rank_of(&self, key: &T) -> Option<usize> {
        match self.lower_rank(key) {
            (rank, true) => Some(rank),
            (_, false) => None,
        }
    }

    /// Returns how many stored keys compare equal to `key`.
    pub(crate) fn count(&self, key: &T) -> usize {
        let (lower, found) = self.lower_rank(key);
        if found { self.upper_rank(key) - lower } else { 0 }
    }
}

/// Double-ended in-order walk over an arena-backed tree.
///
/// Each end keeps its own stack of pending ancestors; `remaining` stops the two
/// ends from crossing.
pub(crate) struct InOrder<'a, T> {
    nodes: &'a Arena<AvlNode<T>>,
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn new(nodes: &'a Arena<AvlNode<T>>, root: Option<Handle>, len: usize) -> Self {
        let mut walk = Self {
            nodes,
            front: Stack::new(),
            back: Stack::new(),
            remaining: len,
        };
        walk.descend_left(root);
        walk.descend_right(root);
        walk
    }

    fn descend_left(&mut self, mut current: Option<Handle>) {
        let nodes = self.nodes;
        while let Some(handle) = current {
            self.front.push(handle);
            current = nodes.get(handle).left();
        }
    }

    fn descend_right(&mut self, mut current: Option<Handle>) {
        let nodes = self.nodes;
        while let Some(handle) = current {
            self.back.push(handle);
            current = nodes.get(handle).right();
        }
    }

    pub(crate) fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = nodes.get(self.front.pop()?);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    pub(crate) fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = nodes.get(self.back.pop()?);
        self.descend_right(node.left());
        self.remaining -= 1;
        Some(node.key())
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
mod tests {
    use super::*;
    use crate::comparator::{Natural, Reverse};
    use alloc::format;
    use alloc::string::String;
    use proptest::prelude::*;

    impl<T, C: Comparator<T>> RawAvlTree<T, C> {
        /// Validates every AVL invariant. Panics with a descriptive message if any
        /// are violated.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();
            let mut keys: Vec<&T> = Vec::new();

            let (_, size) = self.validate_node(self.root, &mut keys, &mut errors);

            if self.nodes.len() != size {
                errors.push(format!("arena holds {} nodes, tree reaches {}", self.nodes.len(), size));
            }
            if self.len() != size {
                errors.push(format!("len() = {}, counted {}", self.len(), size));
            }
            for (i, pair) in keys.windows(2).enumerate() {
                if self.cmp.compare(pair[0], pair[1]) == Greater {
                    errors.push(format!("in-order keys decrease at positions {} and {}", i, i + 1));
                }
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns (height, size) recomputed from scratch.
        fn validate_node<'a>(
            &'a self,
            node: Option<Handle>,
            keys: &mut Vec<&'a T>,
            errors: &mut Vec<String>,
        ) -> (usize, usize) {
            let Some(handle) = node else {
                return (0, 0);
            };
            let current = self.nodes.get(handle);

            let (left_height, left_size) = self.validate_node(current.left(), keys, errors);
            keys.push(current.key());
            let (right_height, right_size) = self.validate_node(current.right(), keys, errors);

            let height = 1 + left_height.max(right_height);
            let size = 1 + left_size + right_size;

            if usize::from(current.height()) != height {
                errors.push(format!("height mismatch at {handle:?}: stored={}, actual={height}", current.height()));
            }
            if current.size().to_usize() != size {
                errors.push(format!("size mismatch at {handle:?}: stored={}, actual={size}", current.size().to_usize()));
            }
            if left_height.abs_diff(right_height) > 1 {
                errors.push(format!("unbalanced at {handle:?}: left height {left_height}, right height {right_height}"));
            }

            (height, size)
        }

        fn root_key(&self) -> &T {
            self.nodes.get(self.root.expect("tree is empty")).key()
        }
    }

    fn tree_of(keys: &[i32]) -> RawAvlTree<i32, Natural> {
        let mut tree = RawAvlTree::new(Natural);
        for &key in keys {
            tree.insert(key);
            tree.validate_invariants();
        }
        tree
    }

    fn collect(tree: &RawAvlTree<i32, impl Comparator<i32>>) -> Vec<i32> {
        let mut walk = tree.in_order();
        let mut keys = Vec::new();
        while let Some(&key) = walk.next() {
            keys.push(key);
        }
        keys
    }

    // Test operations enum for property testing
    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..64).prop_map(Op::Insert),
            2 => (0i32..64).prop_map(Op::Remove),
        ]
    }

    /// Applies `op` to a sorted vector standing in for the multiset.
    fn apply_to_model(model: &mut Vec<i32>, op: &Op) -> bool {
        match *op {
            Op::Insert(key) => {
                let at = model.partition_point(|&k| k <= key);
                model.insert(at, key);
                true
            }
            Op::Remove(key) => match model.binary_search(&key) {
                Ok(at) => {
                    model.remove(at);
                    true
                }
                Err(_) => false,
            },
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn tree_invariants_maintained_after_operations(ops in prop::collection::vec(op_strategy(), 0..400)) {
            let mut tree = RawAvlTree::new(Natural);
            let mut model: Vec<i32> = Vec::new();

            for op in &ops {
                let changed = apply_to_model(&mut model, op);
                match *op {
                    Op::Insert(key) => tree.insert(key),
                    Op::Remove(key) => {
                        let removed = tree.remove(&key);
                        prop_assert_eq!(removed.is_some(), changed);
                        if let Some(removed) = removed {
                            prop_assert_eq!(removed, key);
                        }
                    }
                }
                tree.validate_invariants();
                prop_assert_eq!(tree.len(), model.len());
            }

            prop_assert_eq!(collect(&tree), model);
        }

        #[test]
        fn get_by_rank_matches_sorted_model(ops in prop::collection::vec(op_strategy(), 1..300)) {
            let mut tree = RawAvlTree::new(Natural);
            let mut model: Vec<i32> = Vec::new();

            for op in &ops {
                apply_to_model(&mut model, op);
                match *op {
                    Op::Insert(key) => tree.insert(key),
                    Op::Remove(key) => {
                        tree.remove(&key);
                    }
                }
            }

            for (rank, expected) in model.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank), Some(expected), "rank {}", rank);
            }
            prop_assert!(tree.get_by_rank(model.len()).is_none());
        }

        #[test]
        fn rank_and_count_match_model(keys in prop::collection::vec(0i32..40, 0..200), probe in -5i32..45) {
            let mut tree = RawAvlTree::new(Natural);
            let mut model = keys.clone();
            model.sort_unstable();
            for &key in &keys {
                tree.insert(key);
            }

            let expected_rank = model.binary_search(&probe).ok().map(|_| model.partition_point(|&k| k < probe));
            let expected_count = model.iter().filter(|&&k| k == probe).count();

            prop_assert_eq!(tree.rank_of(&probe), expected_rank);
            prop_assert_eq!(tree.count(&probe), expected_count);
        }

        #[test]
        fn in_order_walk_meets_in_the_middle(keys in prop::collection::vec(any::<i32>(), 0..200), from_front in prop::collection::vec(any::<bool>(), 0..220)) {
            let tree = {
                let mut tree = RawAvlTree::new(Natural);
                for &key in &keys {
                    tree.insert(key);
                }
                tree
            };
            let mut model = keys.clone();
            model.sort_unstable();

            let mut walk = tree.in_order();
            let (mut lo, mut hi) = (0, model.len());
            for front in from_front {
                prop_assert_eq!(walk.len(), hi - lo);
                let step = if front { walk.next() } else { walk.next_back() };
                if lo == hi {
                    prop_assert!(step.is_none());
                } else if front {
                    prop_assert_eq!(step, Some(&model[lo]));
                    lo += 1;
                } else {
                    hi -= 1;
                    prop_assert_eq!(step, Some(&model[hi]));
                }
            }
        }
    }

    #[test]
    fn empty_tree_queries() {
        let tree: RawAvlTree<i32, Natural> = RawAvlTree::new(Natural);
        tree.validate_invariants();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.max_width(), 0);
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.get_by_rank(0).is_none());
        assert!(tree.rank_of(&1).is_none());
        assert_eq!(tree.count(&1), 0);
        assert!(!tree.contains(&1));
    }

    #[test]
    fn single_left_rotation_on_ascending_keys() {
        let tree = tree_of(&[1, 2, 3]);
        assert_eq!(*tree.root_key(), 2);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn single_right_rotation_on_descending_keys() {
        let tree = tree_of(&[3, 2, 1]);
        assert_eq!(*tree.root_key(), 2);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn double_rotation_left_right() {
        let tree = tree_of(&[30, 10, 20]);
        assert_eq!(*tree.root_key(), 20);
        assert_eq!(collect(&tree), [10, 20, 30]);
    }

    #[test]
    fn double_rotation_right_left() {
        let tree = tree_of(&[10, 30, 20]);
        assert_eq!(*tree.root_key(), 20);
        assert_eq!(collect(&tree), [10, 20, 30]);
    }

    #[test]
    fn remove_node_with_two_children_promotes_successor() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 65]);
        assert_eq!(tree.remove(&50), Some(50));
        tree.validate_invariants();
        assert_eq!(*tree.root_key(), 60);
        assert_eq!(collect(&tree), [20, 30, 40, 60, 65, 70, 80]);
    }

    #[test]
    fn remove_rebalances_toward_the_heavier_side() {
        let mut tree = tree_of(&[20, 10, 30, 25]);
        tree.remove(&10);
        tree.validate_invariants();
        assert_eq!(*tree.root_key(), 25);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn remove_missing_key_leaves_tree_untouched() {
        let mut tree = tree_of(&[4, 2, 6]);
        assert_eq!(tree.remove(&5), None);
        tree.validate_invariants();
        assert_eq!(collect(&tree), [2, 4, 6]);
    }

    #[test]
    fn duplicates_are_kept_and_removed_one_at_a_time() {
        let mut tree = tree_of(&[5, 5, 5, 1, 9, 5]);
        assert_eq!(tree.count(&5), 4);
        assert_eq!(tree.rank_of(&5), Some(1));

        tree.remove(&5);
        tree.validate_invariants();
        assert_eq!(tree.count(&5), 3);
        assert_eq!(collect(&tree), [1, 5, 5, 5, 9]);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut tree = tree_of(&[1, 2, 3, 4]);
        let capacity = tree.capacity();
        for key in [1, 3] {
            tree.remove(&key);
        }
        for key in [7, 8] {
            tree.insert(key);
        }
        tree.validate_invariants();
        assert_eq!(tree.capacity(), capacity);
    }

    #[test]
    fn max_width_counts_the_widest_level() {
        assert_eq!(tree_of(&[1]).max_width(), 1);
        assert_eq!(tree_of(&[4, 2, 6, 1, 3, 5, 7]).max_width(), 4);
        assert_eq!(tree_of(&[2, 1, 3, 4]).max_width(), 2);
    }

    #[test]
    fn drain_returns_sorted_keys_and_empties() {
        let mut tree = tree_of(&[8, 3, 5, 3, 1]);
        assert_eq!(tree.drain_to_vec(), [1, 3, 3, 5, 8]);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[test]
    fn reversed_comparator_orders_descending() {
        let mut tree = RawAvlTree::new(Reverse);
        for key in [1, 5, 3, 4, 2] {
            tree.insert(key);
        }
        tree.validate_invariants();
        assert_eq!(collect(&tree), [5, 4, 3, 2, 1]);
        assert_eq!(tree.get_by_rank(0), Some(&5));
    }

    #[test]
    fn ascending_inserts_stay_logarithmic() {
        let mut tree = RawAvlTree::new(Natural);
        for key in 0..4096 {
            tree.insert(key);
        }
        tree.validate_invariants();
        // 1.44 * log2(4097) rounds down to 17.
        assert!(tree.height() <= 17, "height {} too large", tree.height());
    }
}
