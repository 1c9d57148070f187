//! A set backed by an unbalanced Binary Search Tree.
//!
//! All of the work happens in a handful of recursive functions over a [`BinaryTree`]. Each one
//! disassembles the tree it is handed into `(root, left, right)`, recurses into exactly one side
//! and assembles the tree again before returning, so by the time control is back with the caller
//! the tree is whole and still a BST.
//!
//! # Examples
//!
//! ```
//! use bst_set::BstSet;
//!
//! let mut set = BstSet::new();
//! for x in [5, 3, 8, 1, 4] {
//!     set.add(x);
//! }
//!
//! // Removing an element with two children promotes its in-order successor.
//! assert_eq!(set.remove(&3), 3);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 4, 5, 8]);
//!
//! // `remove_any` always hands back the smallest element.
//! assert_eq!(set.remove_any(), 1);
//!
//! // Moving a whole tree between sets doesn't copy anything.
//! let mut other = BstSet::new();
//! other.transfer_from(&mut set);
//! assert!(set.is_empty());
//! assert_eq!(other.size(), 3);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::tree::{BinaryTree, Tree};
use crate::{Error, Result};

/// A finite set of ordered elements stored in a Binary Search Tree.
///
/// `B` is the tree representation. Anything implementing [`BinaryTree`] works; [`Tree`] is used
/// by default.
///
/// The tree is never rebalanced so its shape depends on insertion order. Adding elements in
/// sorted order produces a tree of height `n`.
#[derive(Clone)]
pub struct BstSet<T, B = Tree<T>> {
    tree: B,
    marker: PhantomData<T>,
}

impl<T, B> Default for BstSet<T, B>
where
    B: Default,
{
    fn default() -> Self {
        Self {
            tree: B::default(),
            marker: PhantomData,
        }
    }
}

impl<T> BstSet<T> {
    /// Generates a new, empty `BstSet`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, B> BstSet<T, B>
where
    B: BinaryTree<T>,
{
    /// Returns a new, empty set using the same tree representation as this one.
    pub fn new_instance(&self) -> Self {
        Self {
            tree: self.tree.new_instance(),
            marker: PhantomData,
        }
    }

    /// The number of elements in the set.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every element from the set.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn clear(&mut self) {
        self.tree = self.tree.new_instance();
    }

    /// Replaces the contents of this set with the contents of `source`, leaving `source` empty.
    /// The tree is moved over whole; no element is copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut a: BstSet<_> = ["z"].into_iter().collect();
    /// let mut b: BstSet<_> = ["x", "y"].into_iter().collect();
    /// a.transfer_from(&mut b);
    ///
    /// let expected: BstSet<_> = ["x", "y"].into_iter().collect();
    /// assert_eq!(a, expected);
    /// assert!(b.is_empty());
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn transfer_from(&mut self, source: &mut Self) {
        self.tree.transfer_from(&mut source.tree);
        #[cfg(feature = "tracing")]
        tracing::trace!(size = self.size(), "absorbed tree from source set");
    }

    /// Removes an element from the set and returns it. The element removed is always the
    /// smallest one.
    ///
    /// ## Panics
    ///
    /// When the set is empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn remove_any(&mut self) -> T {
        assert!(!self.is_empty(), "Violation of: this /= empty_set");

        remove_smallest(&mut self.tree)
    }

    /// Like [`remove_any`][Self::remove_any] but returns [`Error::Empty`] instead of panicking.
    pub fn try_remove_any(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        Ok(remove_smallest(&mut self.tree))
    }

    /// Visits every element of the set exactly once. With the default [`Tree`] this is in
    /// ascending order.
    pub fn iter(&self) -> B::Iter<'_> {
        self.tree.iter()
    }
}

impl<T, B> BstSet<T, B>
where
    T: Ord,
    B: BinaryTree<T>,
{
    /// Whether `x` is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.add(String::from("one"));
    ///
    /// assert!(set.contains("one"));
    /// assert!(!set.contains("two"));
    /// ```
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        is_in_tree(&self.tree, x)
    }

    /// Adds `x` to the set.
    ///
    /// ## Panics
    ///
    /// When `x` is already in the set.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn add(&mut self, x: T) {
        let inserted = insert_in_tree(&mut self.tree, x);
        assert!(inserted, "Violation of: x is not in this");
    }

    /// Like [`add`][Self::add] but returns [`Error::AlreadyPresent`] instead of panicking. The
    /// set is unchanged in that case.
    pub fn try_add(&mut self, x: T) -> Result<()> {
        if insert_in_tree(&mut self.tree, x) {
            Ok(())
        } else {
            Err(Error::AlreadyPresent)
        }
    }

    /// Removes `x` from the set and returns the element that was stored for it.
    ///
    /// ## Panics
    ///
    /// When `x` is not in the set.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn remove<Q>(&mut self, x: &Q) -> T
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match remove_from_tree(&mut self.tree, x) {
            Some(removed) => removed,
            None => panic!("Violation of: x is in this"),
        }
    }

    /// Like [`remove`][Self::remove] but returns [`Error::NotPresent`] instead of panicking.
    pub fn try_remove<Q>(&mut self, x: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        remove_from_tree(&mut self.tree, x).ok_or(Error::NotPresent)
    }
}

/// Returns whether `x` is a label of `tree`.
fn is_in_tree<T, B, Q>(tree: &B, x: &Q) -> bool
where
    B: BinaryTree<T>,
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match tree.parts() {
        None => false,
        Some((root, left, right)) => match x.cmp(root.borrow()) {
            Ordering::Less => is_in_tree(left, x),
            Ordering::Equal => true,
            Ordering::Greater => is_in_tree(right, x),
        },
    }
}

/// Inserts `x` as a new leaf of `tree`. Returns `false`, leaving the tree as it was, if `x` is
/// already a label of `tree`.
fn insert_in_tree<T, B>(tree: &mut B, x: T) -> bool
where
    T: Ord,
    B: BinaryTree<T>,
{
    if tree.height() == 0 {
        let left = tree.new_instance();
        let right = tree.new_instance();
        tree.assemble(x, left, right);
        return true;
    }

    let (root, mut left, mut right) = tree.disassemble();
    let inserted = match x.cmp(&root) {
        Ordering::Less => insert_in_tree(&mut left, x),
        Ordering::Equal => false,
        Ordering::Greater => insert_in_tree(&mut right, x),
    };
    tree.assemble(root, left, right);

    inserted
}

/// Removes and returns the smallest label of `tree`, which must not be empty.
fn remove_smallest<T, B>(tree: &mut B) -> T
where
    B: BinaryTree<T>,
{
    let (root, mut left, mut right) = tree.disassemble();
    match left.height() {
        // No left subtree so the root is the smallest and the right subtree takes its place.
        0 => {
            tree.transfer_from(&mut right);
            root
        }
        1 => {
            let (smallest, _, _) = left.disassemble();
            tree.assemble(root, left, right);
            smallest
        }
        _ => {
            let smallest = remove_smallest(&mut left);
            tree.assemble(root, left, right);
            smallest
        }
    }
}

/// Removes the label equal to `x` from `tree` and returns it, or `None` if there is no such
/// label.
fn remove_from_tree<T, B, Q>(tree: &mut B, x: &Q) -> Option<T>
where
    B: BinaryTree<T>,
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if tree.height() == 0 {
        return None;
    }

    let (root, mut left, mut right) = tree.disassemble();
    match x.cmp(root.borrow()) {
        Ordering::Less => {
            let removed = remove_from_tree(&mut left, x);
            tree.assemble(root, left, right);
            removed
        }
        Ordering::Greater => {
            let removed = remove_from_tree(&mut right, x);
            tree.assemble(root, left, right);
            removed
        }
        Ordering::Equal => {
            if right.height() > 0 {
                // The in-order successor is larger than all of `left` and smaller than the rest
                // of `right`.
                let successor = remove_smallest(&mut right);
                tree.assemble(successor, left, right);
            } else {
                tree.transfer_from(&mut left);
            }
            Some(root)
        }
    }
}

impl<T, B, C> PartialEq<BstSet<T, C>> for BstSet<T, B>
where
    T: Ord,
    B: BinaryTree<T>,
    C: BinaryTree<T>,
{
    /// Sets are equal when they hold the same elements, whatever the shape of their trees.
    fn eq(&self, other: &BstSet<T, C>) -> bool {
        self.size() == other.size() && self.iter().all(|x| other.contains(x))
    }
}

impl<T, B> Eq for BstSet<T, B>
where
    T: Ord,
    B: BinaryTree<T>,
{
}

impl<T, B> fmt::Debug for BstSet<T, B>
where
    T: fmt::Debug,
    B: BinaryTree<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, B> fmt::Display for BstSet<T, B>
where
    T: fmt::Display,
    B: BinaryTree<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("}")
    }
}

impl<T, B> Extend<T> for BstSet<T, B>
where
    T: Ord,
    B: BinaryTree<T>,
{
    /// Adds every element of `iter`.
    ///
    /// ## Panics
    ///
    /// When an element is already in the set, including one that appeared earlier in `iter`.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<T, B> FromIterator<T> for BstSet<T, B>
where
    T: Ord,
    B: BinaryTree<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a, T, B> IntoIterator for &'a BstSet<T, B>
where
    T: 'a,
    B: BinaryTree<T> + 'a,
{
    type Item = &'a T;
    type IntoIter = B::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl<T, B> IntoIterator for BstSet<T, B>
where
    B: BinaryTree<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}

/// An owning iterator over the elements of a [`BstSet`]. Elements come out in ascending order
/// because each one is taken with [`BstSet::remove_any`].
pub struct IntoIter<T, B = Tree<T>> {
    set: BstSet<T, B>,
}

impl<T, B> Iterator for IntoIter<T, B>
where
    B: BinaryTree<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.set.try_remove_any().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.size(), Some(self.set.size()))
    }
}

impl<T, B> ExactSizeIterator for IntoIter<T, B> where B: BinaryTree<T> {}

impl<T, B> FusedIterator for IntoIter<T, B> where B: BinaryTree<T> {}
