//! Emitting the `(parent, child)` edges of a tree so it can be drawn.
//!
//! The tree itself knows nothing about drawing. Anything which wants to
//! consume its edges implements [`EdgeSink`]. [`Dot`] is one such sink which
//! writes a [Graphviz](https://graphviz.org) `digraph`.
//!
//! # Examples
//!
//! ```
//! use wooden::{render::Dot, BinaryTree, TraverseOrder};
//!
//! let tree = BinaryTree::new(vec![2, 1, 3], TraverseOrder::PreOrder);
//! let mut out = Vec::new();
//! Dot::render(&tree, &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph {\n    node [shape=circle];\n    \"2\";\n    \"2\" -> \"1\";\n    \"2\" -> \"3\";\n}\n"
//! );
//! ```

use std::fmt;
use std::io;

use crate::tree::BinaryTree;

/// Errors triggered while emitting edges.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The underlying writer failed.
    #[error("failed to write rendered tree")]
    Io(#[from] io::Error),
}

/// Something which consumes the parent/child links of a tree.
pub trait EdgeSink<T> {
    /// Consumes a single link from `parent` down to `child`.
    fn edge(&mut self, parent: &T, child: &T) -> Result<(), RenderError>;
}

impl<T: Clone> EdgeSink<T> for Vec<(T, T)> {
    fn edge(&mut self, parent: &T, child: &T) -> Result<(), RenderError> {
        self.push((parent.clone(), child.clone()));
        Ok(())
    }
}

impl<T> BinaryTree<T> {
    /// Yields every `(parent, child)` pair of values linked in this tree.
    /// Parents come in the tree's configured order and each parent's left
    /// link comes before its right link.
    ///
    /// # Examples
    ///
    /// ```
    /// use wooden::{BinaryTree, TraverseOrder};
    ///
    /// let tree = BinaryTree::new(vec![2, 1, 3, 4], TraverseOrder::PreOrder);
    /// let edges: Vec<_> = tree.edges().map(|(p, c)| (*p, *c)).collect();
    ///
    /// assert_eq!(edges, vec![(2, 1), (2, 3), (3, 4)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.iter().flat_map(|parent| {
            parent
                .children()
                .map(move |child| (parent.value(), child.value()))
        })
    }

    /// Feeds every edge of [`edges`][Self::edges] into `sink`, returning how
    /// many there were.
    pub fn emit_edges<S>(&self, sink: &mut S) -> Result<usize, RenderError>
    where
        S: EdgeSink<T> + ?Sized,
    {
        let mut count = 0;
        for (parent, child) in self.edges() {
            sink.edge(parent, child)?;
            count += 1;
        }
        Ok(count)
    }
}

/// An [`EdgeSink`] writing Graphviz DOT statements.
pub struct Dot<W> {
    writer: W,
}

impl<W: io::Write> Dot<W> {
    /// Writes the header of a `digraph` to `writer`.
    pub fn new(mut writer: W) -> Result<Self, RenderError> {
        writeln!(writer, "digraph {{")?;
        writeln!(writer, "    node [shape=circle];")?;
        Ok(Self { writer })
    }

    /// Closes the `digraph`, handing back the writer.
    pub fn finish(mut self) -> Result<W, RenderError> {
        writeln!(self.writer, "}}")?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Writes a standalone node statement for `value`.
    pub fn node<T: fmt::Display>(&mut self, value: &T) -> Result<(), RenderError> {
        writeln!(self.writer, "    {};", quoted(value))?;
        Ok(())
    }

    /// Writes a whole `digraph` of `tree` to `writer`. The root gets its own
    /// node statement so a tree without edges still draws.
    pub fn render<T>(tree: &BinaryTree<T>, writer: W) -> Result<W, RenderError>
    where
        T: fmt::Display,
    {
        let mut dot = Self::new(writer)?;
        if let Some(root) = tree.root() {
            dot.node(root.value())?;
        }
        let count = tree.emit_edges(&mut dot)?;
        tracing::debug!(edges = count, "rendered tree as dot");
        dot.finish()
    }
}

impl<T: fmt::Display, W: io::Write> EdgeSink<T> for Dot<W> {
    fn edge(&mut self, parent: &T, child: &T) -> Result<(), RenderError> {
        writeln!(self.writer, "    {} -> {};", quoted(parent), quoted(child))?;
        Ok(())
    }
}

/// Formats `value` as a double quoted DOT ID.
fn quoted<T: fmt::Display>(value: &T) -> String {
    let mut id = String::from("\"");
    for c in value.to_string().chars() {
        if c == '"' || c == '\\' {
            id.push('\\');
        }
        id.push(c);
    }
    id.push('"');
    id
}
