//! Graph representation and the traits every algorithm is written against.
//!
//! A graph is a dense sequence of nodes `0..order`, each owning an ordered list of
//! outgoing arcs. This module provides:
//!
//! - [`NodeId`], [`LabelId`] and [`Half`] - identifiers and labeled half-arcs
//! - [`GraphBase`] and [`Successors`] - the read-only graph abstraction
//! - [`AdjacencyList`] and [`LabeledAdjacencyList`] - the concrete representations
//! - [`Undirected`] - a wrapper carrying the reciprocal-arc invariant
//! - [`validate`] - boundary checks producing [`crate::Error`] values
//! - [`algorithms`] - the SCC, dominator, clique and degeneracy engines
//!
//! # Labeled and Unlabeled Graphs
//!
//! Every algorithm is generic over [`Successors`]. A labeled graph implements it by
//! projecting each [`Half`] onto its target, so the algorithms exist exactly once and
//! run unchanged on both representations.
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::graph::{GraphBase, LabeledAdjacencyList, LabelId, NodeId, Successors};
//!
//! let mut g = LabeledAdjacencyList::with_order(2);
//! g.add_arc(NodeId::new(0), NodeId::new(1), LabelId::new(7));
//!
//! assert_eq!(g.node_count(), 2);
//! let succ: Vec<NodeId> = g.successors(NodeId::new(0)).collect();
//! assert_eq!(succ, vec![NodeId::new(1)]);
//! ```

mod adjacency;
mod edge;
mod node;

pub mod algorithms;
pub mod validate;

pub use adjacency::{in_degrees, transpose, AdjacencyList, LabeledAdjacencyList, Undirected};
pub use edge::{Half, LabelId};
pub use node::NodeId;

/// Basic information about a graph: its order and its node ids.
pub trait GraphBase {
    /// Returns the number of nodes (the order of the graph).
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node ids, in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Returns `true` if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Forward adjacency: the targets of the arcs leaving a node.
///
/// This is the single abstraction the algorithm engines consume. Implementations
/// must yield targets in `0..node_count()`; anything else is a caller error which
/// [`validate::validate_bounds`] can detect up front.
pub trait Successors: GraphBase {
    /// Returns the targets of the arcs leaving `node`, in list order.
    ///
    /// Parallel arcs yield their target once per arc.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;

    /// Returns the number of arcs leaving `node`.
    fn out_degree(&self, node: NodeId) -> usize {
        self.successors(node).count()
    }
}
