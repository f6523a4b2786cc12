//! An unbalanced Binary Search Tree whose shape is purely a function of its
//! insertion and deletion history.
//!
//! # Examples
//!
//! ```
//! use wooden::{BinaryTree, TraverseOrder};
//!
//! let mut tree = BinaryTree::new(vec![5, 3, 3, 7], TraverseOrder::InOrder);
//!
//! // The duplicate 3 is only stored once.
//! let values: Vec<_> = tree.iter().map(|n| *n.value()).collect();
//! assert_eq!(values, vec![3, 5, 7]);
//!
//! tree.delete(&5);
//! assert!(!tree.contains(&5));
//! assert!(tree.contains(&7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::node::{Link, Node};
use crate::traverse::{Iter, TraverseOrder};

/// A Binary Search Tree storing distinct values. This can be used for
/// inserting, deleting and testing membership of values, and for walking
/// the tree in any [`TraverseOrder`].
///
/// No rebalancing is ever done so the worst case depth is `O(n)`.
pub struct BinaryTree<T> {
    root: Link<T>,
    order: TraverseOrder,
    len: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::with_order(TraverseOrder::default())
    }
}

impl<T> Drop for BinaryTree<T> {
    // Dropping the nodes one at a time keeps long, unbalanced chains from
    // overflowing the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree` which iterates in the given order.
    pub fn with_order(order: TraverseOrder) -> Self {
        Self {
            root: None,
            order,
            len: 0,
        }
    }

    /// The order [`iter`][Self::iter] walks this tree in.
    pub fn order(&self) -> TraverseOrder {
        self.order
    }

    /// How many values are stored in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Walks the tree in its configured order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse(self.order)
    }

    /// Walks the tree in the given order, regardless of the configured one.
    ///
    /// # Examples
    ///
    /// ```
    /// use wooden::{BinaryTree, TraverseOrder};
    ///
    /// let tree = BinaryTree::new(vec![4, 2, 6, 1, 3, 7], TraverseOrder::InOrder);
    /// let values = |order| tree.traverse(order).map(|n| *n.value()).collect::<Vec<_>>();
    ///
    /// assert_eq!(values(TraverseOrder::PreOrder), vec![4, 2, 1, 3, 6, 7]);
    /// assert_eq!(values(TraverseOrder::PostOrder), vec![1, 3, 2, 7, 6, 4]);
    /// assert_eq!(values(TraverseOrder::LevelOrder), vec![4, 2, 6, 1, 3, 7]);
    /// ```
    pub fn traverse(&self, order: TraverseOrder) -> Iter<'_, T> {
        Iter::new(self.root(), order, self.len)
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Builds a tree by inserting each of `initial`, in order, into an empty
    /// tree which iterates in `order`.
    ///
    /// # Stack usage
    ///
    /// Inserting recurses once per level, so the recursion depth equals the
    /// tree height. Nothing rebalances the tree and a long sorted `initial`
    /// builds a chain as tall as it is long, which can overflow the stack.
    pub fn new<I>(initial: I, order: TraverseOrder) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_order(order);
        tree.extend(initial);
        tree
    }

    /// Inserts the given value into the tree. Inserting a value which is
    /// already present does nothing and the originally inserted value is kept.
    ///
    /// Like [`delete`][Self::delete], this recurses once per level walked, so
    /// its recursion depth equals the tree height.
    ///
    /// # Examples
    ///
    /// ```
    /// use wooden::BinaryTree;
    ///
    /// let mut tree = BinaryTree::default();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), value, 0, &mut inserted));
        if inserted {
            self.len += 1;
        }
    }

    /// Deletes the node holding the given value from the tree. If the tree
    /// does not contain the value, nothing happens.
    /// The recursion depth equals the tree height.
    ///
    /// # Examples
    ///
    /// ```
    /// use wooden::BinaryTree;
    ///
    /// let mut tree: BinaryTree<i32> = vec![2, 1, 3].into_iter().collect();
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, value: &T) {
        let mut deleted = false;
        self.root = delete(self.root.take(), value, &mut deleted);
        if deleted {
            self.len -= 1;
        }
    }

    /// Whether some node met while walking the tree in its configured order
    /// holds the given value. This always walks the tree rather than
    /// searching it, so it is `O(n)`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|node| node == value)
    }
}

fn insert<T: Ord>(link: Link<T>, value: T, depth: usize, inserted: &mut bool) -> Box<Node<T>> {
    match link {
        None => {
            tracing::trace!(depth, "creating node");
            *inserted = true;
            Node::new_boxed(value, depth)
        }
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => {
                    node.left = Some(insert(node.left.take(), value, depth + 1, inserted));
                }
                Ordering::Equal => {
                    tracing::trace!(depth, "ignoring duplicate value");
                }
                Ordering::Greater => {
                    node.right = Some(insert(node.right.take(), value, depth + 1, inserted));
                }
            }
            node
        }
    }
}

fn delete<T: Ord>(link: Link<T>, value: &T, deleted: &mut bool) -> Link<T> {
    let mut node = match link {
        Some(node) => node,
        None => {
            tracing::trace!("value to delete not found");
            return None;
        }
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value, deleted),
        Ordering::Greater => node.right = delete(node.right.take(), value, deleted),
        Ordering::Equal => {
            *deleted = true;
            match (node.left.take(), node.right.take()) {
                (None, right) => {
                    tracing::trace!(depth = node.depth, "splicing in right child");
                    return right;
                }
                (left, None) => {
                    tracing::trace!(depth = node.depth, "splicing in left child");
                    return left;
                }
                // With two children we promote this node's successor. That
                // is, the smallest node in its right subtree.
                (left, Some(right)) => {
                    tracing::trace!(depth = node.depth, "promoting in-order successor");
                    let (successor, new_right) = delete_min(right);
                    node.value = successor;
                    node.left = left;
                    node.right = new_right;
                }
            }
        }
    }

    Some(node)
}

/// Removes the leftmost node of the given subtree, returning its value and
/// the subtree without it. The removed node's right child takes its place.
fn delete_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, new_left) = delete_min(left);
            node.left = new_left;
            (min, Some(node))
        }
    }
}

impl<T: Ord> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter, TraverseOrder::default())
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
