//! The binary tree a [`BstSet`][crate::BstSet] is built on.
//!
//! [`BinaryTree`] is the small set of structural operations the set algorithms need: taking a
//! tree apart into its root label and two subtrees, putting it back together, and splicing one
//! tree into another. Every one of them moves ownership rather than copying, so a subtree is only
//! ever reachable through a single handle.
//!
//! [`Tree`] is the boxed implementation used by default.
//!
//! # Examples
//!
//! ```
//! use bst_set::tree::{BinaryTree, Tree};
//!
//! let mut leaf = Tree::new();
//! leaf.assemble(1, Tree::new(), Tree::new());
//!
//! let mut tree = Tree::new();
//! tree.assemble(2, leaf, Tree::new());
//! assert_eq!(tree.size(), 2);
//! assert_eq!(tree.height(), 2);
//!
//! // Taking the tree apart leaves it empty and hands back the pieces.
//! let (root, left, right) = tree.disassemble();
//! assert_eq!(tree.size(), 0);
//! assert_eq!(root, 2);
//! assert_eq!(left.size(), 1);
//! assert_eq!(right.size(), 0);
//!
//! // Putting them back gives the same tree.
//! tree.assemble(root, left, right);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2]);
//! ```

use std::iter::FusedIterator;

/// A mutable binary tree of labels that can be decomposed into, and recomposed from, a root label
/// and two subtrees.
pub trait BinaryTree<T>: Default {
    /// Iterator over the labels of the tree. Every label is produced exactly once.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// The number of nodes in the tree.
    fn size(&self) -> usize;

    /// The number of levels in the tree. An empty tree has a height of 0 and a single node has a
    /// height of 1.
    fn height(&self) -> usize;

    /// Splits the tree into its root label and its left and right subtrees, leaving `self`
    /// empty.
    ///
    /// ## Panics
    ///
    /// When the tree is empty.
    fn disassemble(&mut self) -> (T, Self, Self);

    /// Makes `self` a single node labelled `root` with the given subtrees as children.
    ///
    /// ## Panics
    ///
    /// When `self` is not empty.
    fn assemble(&mut self, root: T, left: Self, right: Self);

    /// Replaces the contents of `self` with the contents of `source`, leaving `source` empty. The
    /// previous contents of `self` are dropped.
    fn transfer_from(&mut self, source: &mut Self);

    /// Borrows the root label and both subtrees, or `None` for an empty tree.
    fn parts(&self) -> Option<(&T, &Self, &Self)>;

    /// Lazily visits every label in the tree.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;

    /// A new, empty tree of the same representation as `self`.
    fn new_instance(&self) -> Self {
        Self::default()
    }
}

/// A binary tree of boxed nodes. Each node caches the size and height of its subtree so both
/// are available in `O(1)`.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

#[derive(Clone, Debug)]
struct Node<T> {
    label: T,
    left: Tree<T>,
    right: Tree<T>,

    /// How many nodes are in the subtree rooted at this node, including itself.
    size: usize,
    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The derived drop recurses once per level which overflows the stack on the long chains an
    // unbalanced tree builds from sorted input.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.root.take());
            stack.extend(node.right.root.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }
}

impl<T> BinaryTree<T> for Tree<T> {
    type Iter<'a> = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn size(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.size)
    }

    fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.height)
    }

    fn disassemble(&mut self) -> (T, Self, Self) {
        let Some(node) = self.root.take() else {
            panic!("Violation of: this /= empty_tree");
        };
        let Node {
            label, left, right, ..
        } = *node;

        (label, left, right)
    }

    fn assemble(&mut self, root: T, left: Self, right: Self) {
        assert!(self.root.is_none(), "Violation of: this = empty_tree");

        let size = left.size() + right.size() + 1;
        let height = left.height().max(right.height()) + 1;
        self.root = Some(Box::new(Node {
            label: root,
            left,
            right,
            size,
            height,
        }));
    }

    fn transfer_from(&mut self, source: &mut Self) {
        // Dropping the old root through a `Tree` keeps the drop iterative.
        let _discarded = Tree {
            root: std::mem::replace(&mut self.root, source.root.take()),
        };
    }

    fn parts(&self) -> Option<(&T, &Self, &Self)> {
        self.root
            .as_deref()
            .map(|node| (&node.label, &node.left, &node.right))
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// An in-order iterator over the labels of a [`Tree`].
///
/// Because the labels of a binary search tree are ordered, this visits them in ascending order.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    /// Nodes whose label hasn't been yielded yet but whose left subtree has been fully pushed.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
            remaining: tree.size(),
        };
        iter.push_left_spine(tree);

        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Some(node) = tree.root.as_deref() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;

        Some(&node.label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
