//! Graph fixtures and helpers shared by the unit tests.

use crate::graph::{AdjacencyList, NodeId, Undirected};

/// Converts raw indices into node ids.
pub fn ids(indices: &[usize]) -> Vec<NodeId> {
    indices.iter().copied().map(NodeId::new).collect()
}

/// Shorthand for `NodeId::new`.
pub fn n(index: usize) -> NodeId {
    NodeId::new(index)
}

/// Builds a directed graph from `(from, to)` pairs.
pub fn directed(order: usize, arcs: &[(usize, usize)]) -> AdjacencyList {
    AdjacencyList::from_arcs(order, arcs)
}

/// Builds an undirected graph from `(a, b)` edge pairs.
pub fn undirected(order: usize, edges: &[(usize, usize)]) -> Undirected<AdjacencyList> {
    Undirected::from_edges(order, edges)
}

/// Sorts each set and then the list of sets, so results can be compared
/// independently of enumeration order.
pub fn normalized(mut sets: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
    for set in &mut sets {
        set.sort();
    }
    sets.sort();
    sets
}

/// ```text
///     0
///    / \
///   1   2
///    \ /
///     3
/// ```
pub fn diamond() -> AdjacencyList {
    directed(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])
}

/// ```text
///   0 -> 1 -> 2 -> 3 -> ... -> len-1
/// ```
pub fn chain(len: usize) -> AdjacencyList {
    let arcs: Vec<(usize, usize)> = (1..len).map(|i| (i - 1, i)).collect();
    directed(len, &arcs)
}
