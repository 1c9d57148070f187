//! This crate exposes a finite set backed by a Binary Search Tree (BST),
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a label and
//! has two children, each of which is itself a (possibly empty) tree. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    label less than its own label.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    label greater than its own label.
//!
//! Together these mean no label appears twice, which is exactly what a set
//! needs.
//!
//! ## How the set works
//!
//! [`BstSet`] owns a single [`BinaryTree`][tree::BinaryTree]. Every mutating
//! operation recursively takes the tree apart into its root label and two
//! subtrees, recurses into exactly one of them, and puts the tree back
//! together before returning. Taking a tree apart moves ownership of both
//! subtrees out to the caller so there is never a moment where a subtree is
//! reachable from two places, and a caller can never observe a tree that
//! breaks the BST invariants.
//!
//! The tree is not rebalanced. Inserting sorted input builds a tree shaped
//! like a linked list: everything still works, searches just take `O(n)`.
//!
//! # Examples
//!
//! ```
//! use bst_set::BstSet;
//!
//! let mut set = BstSet::new();
//! set.add("one");
//! set.add("two");
//!
//! assert_eq!(set.size(), 2);
//! assert!(set.contains("one"));
//! assert!(!set.contains("three"));
//!
//! assert_eq!(set.remove("two"), "two");
//! assert_eq!(set.remove_any(), "one");
//! assert!(set.is_empty());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

use thiserror::Error;

pub mod set;
pub mod tree;

pub use set::BstSet;

/// Result of the checked set operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a checked set operation was refused. The set is left unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The element being added is already in the set.
    #[error("element is already in the set")]
    AlreadyPresent,

    /// The element being removed is not in the set.
    #[error("element is not in the set")]
    NotPresent,

    /// The set has no elements to remove.
    #[error("set is empty")]
    Empty,
}
