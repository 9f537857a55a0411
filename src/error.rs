use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which covers every failure this library can report.
///
/// The algorithm cores never fail: they operate on graphs that are assumed to be
/// well formed and treat anything else as a caller error. The variants below are
/// produced exclusively by the validating entry points (see
/// [`crate::graph::validate`]), which reject malformed input before an algorithm
/// ever touches it.
///
/// # Error Categories
///
/// ## Structural Errors
/// - [`Error::EdgeOutOfRange`] - An arc points outside the node range
/// - [`Error::NodeOutOfRange`] - A caller-supplied node is outside the node range
/// - [`Error::NotReciprocal`] - A graph claimed to be undirected is missing a half
///
/// ## Precondition Errors
/// - [`Error::Loop`] - Clique enumeration requires a loop-free graph
/// - [`Error::ParallelEdge`] - Clique enumeration requires a graph without parallel edges
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Error, graph::{AdjacencyList, NodeId, Undirected}};
///
/// let mut g = AdjacencyList::with_order(2);
/// g.add_arc(NodeId::new(0), NodeId::new(1));
///
/// match Undirected::new(g) {
///     Err(Error::NotReciprocal { from, to }) => {
///         assert_eq!((from.index(), to.index()), (0, 1));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An arc targets a node that does not exist.
    ///
    /// Every arc of a graph of order `n` must point into `0..n`.
    #[error("Arc {from} -> {to} leaves the graph of order {order}")]
    EdgeOutOfRange {
        /// Node the offending arc leaves from
        from: NodeId,
        /// Out-of-range target of the arc
        to: NodeId,
        /// Number of nodes in the graph
        order: usize,
    },

    /// A node supplied by the caller (a start or end node, for example) does
    /// not exist in the graph.
    #[error("Node {node} is outside the graph of order {order}")]
    NodeOutOfRange {
        /// The offending node
        node: NodeId,
        /// Number of nodes in the graph
        order: usize,
    },

    /// The graph contains a loop, but the requested operation needs a simple graph.
    #[error("Graph is not simple - loop on {0}")]
    Loop(NodeId),

    /// The graph contains parallel arcs, but the requested operation needs a simple graph.
    #[error("Graph is not simple - parallel arcs {from} -> {to}")]
    ParallelEdge {
        /// Source of the repeated arc
        from: NodeId,
        /// Target of the repeated arc
        to: NodeId,
    },

    /// An arc of a graph that should be undirected has no reciprocal arc.
    #[error("Graph is not undirected - arc {from} -> {to} has no reciprocal")]
    NotReciprocal {
        /// Source of the unpaired arc
        from: NodeId,
        /// Target of the unpaired arc
        to: NodeId,
    },
}
