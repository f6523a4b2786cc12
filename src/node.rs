//! The ownership unit of a [`BinaryTree`][crate::BinaryTree].
//!
//! A `Node` owns its value and, exclusively, its two optional subtrees. It
//! compares equal/less/greater to another `Node` or to a bare value purely by
//! delegating to its value so tree code can compare "value vs node" and
//! "node vs node" the same way.

use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly absent subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node in a [`BinaryTree`][crate::BinaryTree].
///
/// Nodes are only ever handed out by reference during traversal.
///
/// # Examples
///
/// ```
/// use wooden::{BinaryTree, TraverseOrder};
///
/// let tree = BinaryTree::new(vec![2, 1, 3], TraverseOrder::PreOrder);
/// let root = tree.iter().next().unwrap();
///
/// assert_eq!(*root, 2);
/// assert_eq!(root.depth(), 0);
/// assert_eq!(root.left().map(|n| *n.value()), Some(1));
/// assert_eq!(root.right().map(|n| n.depth()), Some(1));
/// ```
pub struct Node<T> {
    pub(crate) value: T,
    /// Distance from the root at the time this node was created. Never
    /// recomputed, so it goes stale when a deletion splices a subtree upwards.
    pub(crate) depth: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T, depth: usize) -> Box<Self> {
        Box::new(Self {
            value,
            depth,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The depth this node was created at. The root of a fresh tree has depth `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The children of this node which exist, left before right.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: PartialEq> PartialEq<T> for Node<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: PartialOrd> PartialOrd<T> for Node<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}
