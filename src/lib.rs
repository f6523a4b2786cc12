//! This crate exposes an unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree here never rebalances itself. Its shape depends entirely on the
//! order values were inserted and deleted in, so inserting sorted values
//! produces a tree that is really a linked list.
//!
//! ## Traversal
//!
//! A tree can be walked in four orders (see [`TraverseOrder`]). Each tree is
//! built with the order its [`iter`][BinaryTree::iter] uses, and
//! [`traverse`][BinaryTree::traverse] walks it in any other. Walking
//! [`InOrder`][TraverseOrder::InOrder] always yields values in ascending order.
//!
//! ```
//! use wooden::{BinaryTree, TraverseOrder};
//!
//! let values = [22, 19, 9, 11, 17, 20, 21, 10, 4, 12, 7, 14, 24, 23, 16, 6, 13, 3, 5, 8, 2, 0, 1, 15, 18];
//! let tree = BinaryTree::new(values.iter().copied(), TraverseOrder::InOrder);
//!
//! let sorted: Vec<_> = tree.iter().map(|n| *n.value()).collect();
//! assert_eq!(sorted, (0..25).collect::<Vec<_>>());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod render;
mod traverse;
mod tree;


pub use node::Node;
pub use traverse::{Iter, ParseTraverseOrderError, TraverseOrder};
pub use tree::BinaryTree;
