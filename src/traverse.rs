//! Traversal orders and the iterator that walks a tree in them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::vec;

use crate::node::Node;

/// The order in which a [`BinaryTree`][crate::BinaryTree] yields its nodes.
///
/// # Examples
///
/// ```
/// use wooden::TraverseOrder;
///
/// assert_eq!(TraverseOrder::default(), TraverseOrder::PreOrder);
/// assert_eq!("in-order".parse(), Ok(TraverseOrder::InOrder));
/// assert_eq!(TraverseOrder::LevelOrder.to_string(), "level-order");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraverseOrder {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This yields
    /// values in ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Nodes bucketed by their cached depth, shallowest bucket first.
    LevelOrder,
}

impl TraverseOrder {
    /// Every traversal order.
    pub const ALL: [Self; 4] = [
        Self::PreOrder,
        Self::InOrder,
        Self::PostOrder,
        Self::LevelOrder,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        }
    }
}

impl Default for TraverseOrder {
    fn default() -> Self {
        Self::PreOrder
    }
}

impl fmt::Display for TraverseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`TraverseOrder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal order {0:?}, expected one of pre, in, post or level")]
pub struct ParseTraverseOrderError(String);

impl FromStr for TraverseOrder {
    type Err = ParseTraverseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "pre" | "pre-order" | "preorder" => Ok(Self::PreOrder),
            "in" | "in-order" | "inorder" => Ok(Self::InOrder),
            "post" | "post-order" | "postorder" => Ok(Self::PostOrder),
            "level" | "level-order" | "levelorder" => Ok(Self::LevelOrder),
            _ => Err(ParseTraverseOrderError(s.to_string())),
        }
    }
}

/// An iterator over references to the nodes of a tree in some [`TraverseOrder`].
///
/// Created by [`BinaryTree::iter`][crate::BinaryTree::iter] and
/// [`BinaryTree::traverse`][crate::BinaryTree::traverse]. Once exhausted it
/// stays exhausted; traverse the tree again to start over.
pub struct Iter<'a, T> {
    inner: Walk<'a, T>,
    remaining: usize,
}

enum Walk<'a, T> {
    /// Nodes still to be visited, the next one on top.
    Pre(Vec<&'a Node<T>>),
    /// The next subtree to descend and the ancestors waiting to be visited.
    In {
        current: Option<&'a Node<T>>,
        stack: Vec<&'a Node<T>>,
    },
    /// Each entry is a node and whether its children were already expanded.
    Post(Vec<(&'a Node<T>, bool)>),
    /// The already grouped level-order sequence.
    Level(vec::IntoIter<&'a Node<T>>),
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: TraverseOrder, len: usize) -> Self {
        let inner = match order {
            TraverseOrder::PreOrder => Walk::Pre(root.into_iter().collect()),
            TraverseOrder::InOrder => Walk::In {
                current: root,
                stack: Vec::new(),
            },
            TraverseOrder::PostOrder => Walk::Post(root.into_iter().map(|n| (n, false)).collect()),
            TraverseOrder::LevelOrder => Walk::Level(level_order(root).into_iter()),
        };

        Self {
            inner,
            remaining: len,
        }
    }
}

/// Groups nodes by their cached depth. Within a depth, nodes keep the order a
/// left-first pre-order descent meets them.
fn level_order<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut levels: BTreeMap<usize, Vec<&Node<T>>> = BTreeMap::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        levels.entry(node.depth).or_default().push(node);
        stack.extend(node.right());
        stack.extend(node.left());
    }

    levels.into_iter().flat_map(|(_, nodes)| nodes).collect()
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &mut self.inner {
            Walk::Pre(stack) => {
                let node = stack.pop()?;
                // Right goes on first so left comes off first.
                stack.extend(node.right());
                stack.extend(node.left());
                Some(node)
            }
            Walk::In { current, stack } => {
                while let Some(node) = current.take() {
                    stack.push(node);
                    *current = node.left();
                }
                let node = stack.pop()?;
                *current = node.right();
                Some(node)
            }
            Walk::Post(stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    break Some(node);
                }
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            },
            Walk::Level(nodes) => nodes.next(),
        };

        if next.is_some() {
            self.remaining -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}
