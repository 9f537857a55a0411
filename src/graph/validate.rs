//! Boundary validation for graphs handed to the algorithm engines.
//!
//! The engines assume well-formed input and never check it themselves. The
//! functions in this module turn the preconditions into [`Error`] values so
//! that callers can reject malformed graphs before running an algorithm:
//!
//! - [`validate_bounds`] - every arc targets a node of the graph
//! - [`validate_node`] - a caller-supplied node is part of the graph
//! - [`validate_simple`] - no loops and no parallel arcs
//! - [`validate_reciprocal`] - every arc has a reverse arc (undirected graphs)
//!
//! [`has_loop`] and [`has_parallel`] are the underlying checks; they return the
//! first counterexample found instead of an error.
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::{Error, graph::{validate::validate_simple, AdjacencyList, NodeId}};
//!
//! let g = AdjacencyList::from_arcs(2, &[(0, 1), (1, 1)]);
//! assert_eq!(validate_simple(&g), Err(Error::Loop(NodeId::new(1))));
//! ```

use crate::{
    graph::{transpose, GraphBase, NodeId, Successors},
    Error, Result,
};

/// Checks that every arc of `graph` targets a node in `0..node_count()`.
///
/// # Errors
///
/// Returns [`Error::EdgeOutOfRange`] for the first offending arc, scanning nodes
/// and then arcs in list order.
pub fn validate_bounds<G: Successors>(graph: &G) -> Result<()> {
    let order = graph.node_count();
    for from in graph.node_ids() {
        if let Some(to) = graph.successors(from).find(|to| to.index() >= order) {
            return Err(Error::EdgeOutOfRange { from, to, order });
        }
    }
    Ok(())
}

/// Checks that `node` is a node of `graph`.
///
/// # Errors
///
/// Returns [`Error::NodeOutOfRange`] if it is not.
pub fn validate_node<G: GraphBase>(graph: &G, node: NodeId) -> Result<()> {
    let order = graph.node_count();
    if node.index() >= order {
        return Err(Error::NodeOutOfRange { node, order });
    }
    Ok(())
}

/// Checks that `graph` is simple: it has no loops and no parallel arcs.
///
/// # Errors
///
/// Returns [`Error::Loop`] if any node has an arc to itself, otherwise
/// [`Error::ParallelEdge`] if any arc appears more than once.
pub fn validate_simple<G: Successors>(graph: &G) -> Result<()> {
    if let Some(node) = has_loop(graph) {
        return Err(Error::Loop(node));
    }
    if let Some((from, to)) = has_parallel(graph) {
        return Err(Error::ParallelEdge { from, to });
    }
    Ok(())
}

/// Checks that every arc `a -> b` is matched by an arc `b -> a`.
///
/// Arcs are matched as multisets: two parallel arcs `a -> b` need two arcs
/// `b -> a`. A loop is its own reciprocal. The graph must already satisfy
/// [`validate_bounds`].
///
/// # Errors
///
/// Returns [`Error::NotReciprocal`] naming an arc that has no partner.
pub fn validate_reciprocal<G: Successors>(graph: &G) -> Result<()> {
    let reversed = transpose(graph);
    for node in graph.node_ids() {
        let mut forward: Vec<NodeId> = graph.successors(node).collect();
        let mut backward = reversed.arcs(node).to_vec();
        forward.sort_unstable();
        backward.sort_unstable();

        // Walk both sorted lists; the first unmatched entry names the broken arc
        let (mut i, mut j) = (0, 0);
        loop {
            match (forward.get(i), backward.get(j)) {
                (None, None) => break,
                (Some(&f), Some(&b)) if f == b => {
                    i += 1;
                    j += 1;
                }
                (Some(&f), Some(&b)) if f < b => {
                    return Err(Error::NotReciprocal { from: node, to: f });
                }
                (Some(&f), None) => {
                    return Err(Error::NotReciprocal { from: node, to: f });
                }
                (_, Some(&b)) => {
                    return Err(Error::NotReciprocal { from: b, to: node });
                }
            }
        }
    }
    Ok(())
}

/// Returns the first node with an arc to itself, if any.
pub fn has_loop<G: Successors>(graph: &G) -> Option<NodeId> {
    graph
        .node_ids()
        .find(|&node| graph.successors(node).any(|to| to == node))
}

/// Returns the first pair `(from, to)` connected by more than one arc, if any.
///
/// Multiple loops on the same node count as parallel arcs.
pub fn has_parallel<G: Successors>(graph: &G) -> Option<(NodeId, NodeId)> {
    let mut targets = Vec::new();
    for from in graph.node_ids() {
        targets.clear();
        targets.extend(graph.successors(from));
        targets.sort_unstable();
        if let Some(pair) = targets.windows(2).find(|pair| pair[0] == pair[1]) {
            return Some((from, pair[0]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{directed, n};

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(&directed(2, &[(0, 1), (1, 0)])).is_ok());
        assert_eq!(
            validate_bounds(&directed(2, &[(0, 1), (1, 2)])),
            Err(Error::EdgeOutOfRange {
                from: n(1),
                to: n(2),
                order: 2
            })
        );
    }

    #[test]
    fn test_validate_node() {
        let g = directed(3, &[]);
        assert!(validate_node(&g, n(2)).is_ok());
        assert_eq!(
            validate_node(&g, n(3)),
            Err(Error::NodeOutOfRange {
                node: n(3),
                order: 3
            })
        );
    }

    #[test]
    fn test_validate_simple() {
        assert!(validate_simple(&directed(3, &[(0, 1), (1, 2), (2, 0)])).is_ok());
        assert_eq!(
            validate_simple(&directed(3, &[(0, 1), (2, 2)])),
            Err(Error::Loop(n(2)))
        );
        assert_eq!(
            validate_simple(&directed(3, &[(0, 2), (0, 1), (0, 2)])),
            Err(Error::ParallelEdge {
                from: n(0),
                to: n(2)
            })
        );
    }

    #[test]
    fn test_multiple_loops_are_parallel() {
        let g = directed(1, &[(0, 0), (0, 0)]);
        assert_eq!(has_loop(&g), Some(n(0)));
        assert_eq!(has_parallel(&g), Some((n(0), n(0))));
    }

    #[test]
    fn test_validate_reciprocal() {
        // Loops pair with themselves
        assert!(validate_reciprocal(&directed(2, &[(0, 1), (1, 0), (1, 1)])).is_ok());

        // Missing reverse arc, found from the forward side
        assert_eq!(
            validate_reciprocal(&directed(3, &[(0, 2), (2, 1), (1, 2)])),
            Err(Error::NotReciprocal {
                from: n(0),
                to: n(2)
            })
        );

        // Parallel arcs need the same number of reverse arcs
        assert_eq!(
            validate_reciprocal(&directed(2, &[(0, 1), (0, 1), (1, 0)])),
            Err(Error::NotReciprocal {
                from: n(0),
                to: n(1)
            })
        );
    }

    #[test]
    fn test_validate_reciprocal_reports_backward_surplus() {
        // 1 -> 0 has no partner; node 0 sees it first through the transpose
        assert_eq!(
            validate_reciprocal(&directed(2, &[(1, 0)])),
            Err(Error::NotReciprocal {
                from: n(1),
                to: n(0)
            })
        );
    }
}
