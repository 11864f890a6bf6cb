//! Order-statistic AVL tree for Rust.
//!
//! This crate provides [`OSAvlTree`], a height-balanced binary search tree that
//! stores a multiset of keys and answers "what is the k-th smallest key?" in
//! O(log n):
//!
//! - [`insert`](OSAvlTree::insert) / [`delete`](OSAvlTree::delete) - chainable, duplicates retained
//! - [`find_min`](OSAvlTree::find_min) / [`find_max`](OSAvlTree::find_max) - fail with [`Error::EmptyContainer`] on an empty tree
//! - [`find_stat`](OSAvlTree::find_stat) - the key at a given sorted position
//! - [`rank_of`](OSAvlTree::rank_of) - the sorted position of a key
//! - Indexing by [`Rank`] - e.g., `tree[Rank(0)]` for the smallest key
//!
//! # Example
//!
//! ```
//! use kstat_tree::{OSAvlTree, Rank};
//!
//! let mut tree = OSAvlTree::new();
//! tree.insert(10).insert(20).insert(30);
//! tree.delete(&20);
//!
//! assert_eq!(tree.len(), 2);
//! assert!(!tree.contains(&20));
//! assert_eq!(tree.find_stat(0), &10);
//! assert_eq!(tree[Rank(1)], 30);
//! ```
//!
//! # Ordering
//!
//! Keys are compared only through a [`Comparator`]. The default, [`Natural`],
//! uses [`Ord`]; a closure `Fn(&T, &T) -> Ordering` can be supplied with
//! [`OSAvlTree::with_comparator`].
//!
//! # Implementation
//!
//! Nodes live in a slot arena and refer to their children by index. Each node
//! caches the height and the size of its subtree; the heights drive AVL
//! rotations and the sizes drive rank queries. Insertion and deletion record
//! the path from the root and rebalance every node on it on the way back up.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod comparator;
pub mod error;
pub mod os_avl_tree;

pub use comparator::{Comparator, Natural};
pub use error::{Error, Result};
pub use order_statistic::Rank;
pub use os_avl_tree::OSAvlTree;
