//! Node identifier implementation.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within an adjacency-list graph. The newtype wrapper provides type safety and prevents
//! accidental confusion between node indices, labels and other integer values.

use std::fmt;

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a `usize` index. Node ids are dense: a graph of order `n`
/// owns exactly the ids `0..n`, and the id doubles as the index of the node's
/// adjacency list. Absence of a node is always expressed as `Option<NodeId>`,
/// never through a sentinel value.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::NodeId;
///
/// let a = NodeId::new(0);
/// let b: NodeId = 1.into();
/// assert!(a < b);
/// assert_eq!(format!("{b}"), "n1");
/// assert_eq!(format!("{b:?}"), "NodeId(1)");
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index can be used directly to address per-node vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
