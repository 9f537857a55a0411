//! Labeled arc types.
//!
//! This module provides [`LabelId`], a strongly-typed integer edge label, and
//! [`Half`], the half-arc stored in the adjacency lists of a labeled graph. A
//! half-arc records only the target and the label; the source is implied by the
//! list it is stored in.

use std::fmt;

use crate::graph::NodeId;

/// An integer label attached to an arc.
///
/// Labels are opaque to every algorithm in this crate. They are carried through
/// transposition and otherwise ignored, since all algorithms work on the
/// unlabeled projection of a graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LabelId(pub(crate) i64);

impl LabelId {
    /// Creates a new `LabelId` from a raw label value.
    #[must_use]
    #[inline]
    pub const fn new(label: i64) -> Self {
        LabelId(label)
    }

    /// Returns the raw label value.
    #[must_use]
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelId({})", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}

impl From<i64> for LabelId {
    #[inline]
    fn from(label: i64) -> Self {
        LabelId(label)
    }
}

/// A labeled half-arc: the target node and the label of one outgoing arc.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{Half, LabelId, NodeId};
///
/// let half = Half::new(NodeId::new(3), LabelId::new(-1));
/// assert_eq!(half.to, NodeId::new(3));
/// assert_eq!(format!("{half}"), "n3(l-1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Half {
    /// Target node of the arc
    pub to: NodeId,
    /// Label of the arc
    pub label: LabelId,
}

impl Half {
    /// Creates a new half-arc.
    #[must_use]
    #[inline]
    pub const fn new(to: NodeId, label: LabelId) -> Self {
        Half { to, label }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.to, self.label)
    }
}
