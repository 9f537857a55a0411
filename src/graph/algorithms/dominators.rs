//! Dominators, postdominators and dominance frontiers.
//!
//! This module computes immediate dominators with the iterative data-flow algorithm
//! of Cooper, Harvey and Kennedy ("A Simple, Fast Dominance Algorithm").
//!
//! # Theory
//!
//! A node `d` **dominates** a node `n` if every path from the start node to `n`
//! must pass through `d`. The **immediate dominator** of `n` is the unique node that
//! strictly dominates `n` but does not strictly dominate any other dominator of `n`.
//! Making each node's immediate dominator its parent yields the dominator tree,
//! rooted at the start node.
//!
//! **Postdominators** are the dominators of the transposed graph: `d` postdominates
//! `n` if every path from `n` to the end node passes through `d`.
//!
//! # Algorithm
//!
//! Nodes are numbered by their position in a postorder of a spanning tree of the
//! subgraph reachable from the start; the start node is last. Every other node then
//! takes the intersection of the dominators of its already-resolved predecessors,
//! walking both candidates up the partial dominator tree until they meet. Passes in
//! reverse postorder repeat until nothing changes.
//!
//! # Unreachable Nodes
//!
//! Nodes that the postorder does not contain have no immediate dominator. They are
//! reported as `None` everywhere and are never defaulted to the start node.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    graph::{
        algorithms::traversal::postorder,
        transpose,
        validate::{validate_bounds, validate_node},
        AdjacencyList, NodeId, Successors,
    },
    Result,
};

/// Result of dominator (or postdominator) computation.
///
/// The result owns a copy of the predecessor lists it was computed from, so the
/// input graphs may be dropped or modified afterwards without invalidating
/// [`Dominators::frontier`].
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::dominators, AdjacencyList, NodeId};
///
/// // start -> a -> b -> exit
/// let g = AdjacencyList::from_arcs(4, &[(0, 1), (1, 2), (2, 3)]);
/// let doms = dominators(&g, NodeId::new(0));
///
/// assert!(doms.dominates(NodeId::new(0), NodeId::new(3)));
/// assert_eq!(doms.immediate_dominator(NodeId::new(2)), Some(NodeId::new(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dominators {
    /// The start node, `None` if the computation was given an empty postorder
    start: Option<NodeId>,
    /// Immediate dominator per node; the start node maps to itself
    immediate: Vec<Option<NodeId>>,
    /// Predecessor lists used during the computation
    predecessors: AdjacencyList,
}

impl Dominators {
    /// Returns the start (root) node, or `None` if nothing was reachable.
    #[must_use]
    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    /// Returns the immediate dominator of every node.
    ///
    /// The start node maps to itself, unreachable nodes map to `None`.
    #[must_use]
    pub fn immediate(&self) -> &[Option<NodeId>] {
        &self.immediate
    }

    /// Returns the immediate dominator of a node.
    ///
    /// Returns `Some(start)` for the start node itself and `None` for nodes that
    /// are unreachable or out of range.
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        self.immediate.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` was reached from the start node.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.immediate_dominator(node).is_some()
    }

    /// Checks if node `a` dominates node `b`.
    ///
    /// A reachable node dominates itself. Unreachable nodes neither dominate nor
    /// are dominated.
    ///
    /// # Complexity
    ///
    /// O(depth) where depth is the depth of `b` in the dominator tree.
    #[must_use]
    pub fn dominates(&self, a: NodeId, b: NodeId) -> bool {
        if !self.is_reachable(a) {
            return false;
        }
        self.dominators(b).any(|d| d == a)
    }

    /// Checks if node `a` strictly dominates node `b` (`a` dominates `b` and `a != b`).
    #[must_use]
    pub fn strictly_dominates(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns an iterator over all dominators of a node, from the node itself
    /// up to (and including) the start node.
    ///
    /// The iterator is empty for unreachable nodes.
    pub fn dominators(&self, node: NodeId) -> DominatorIterator<'_> {
        DominatorIterator {
            dominators: self,
            current: self.is_reachable(node).then_some(node),
        }
    }

    /// Returns the depth of a node in the dominator tree, the start node having
    /// depth 0, or `None` for unreachable nodes.
    #[must_use]
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.is_reachable(node)
            .then(|| self.dominators(node).count() - 1)
    }

    /// Returns all children of a node in the dominator tree, in ascending order.
    ///
    /// # Complexity
    ///
    /// O(V) where V is the number of nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.immediate
            .iter()
            .enumerate()
            .filter(|&(i, &idom)| idom == Some(node) && i != node.index())
            .map(|(i, _)| NodeId::new(i))
            .collect()
    }

    /// Computes the dominance frontier of every node.
    ///
    /// The frontier of `a` holds each node `b` such that `a` dominates a
    /// predecessor of `b` but does not strictly dominate `b`. Only nodes with at
    /// least two predecessors can be frontier members; predecessors that are
    /// themselves unreachable are ignored. The start node can sit in the
    /// frontier of nodes with a back edge into it, but never in its own.
    ///
    /// # Complexity
    ///
    /// - Time: O(E * depth) in the worst case, O(V + E) in practice
    /// - Space: O(V²) worst case for the frontiers
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjgraph::graph::{algorithms::dominators, AdjacencyList, NodeId};
    ///
    /// // Diamond: 0 -> {1, 2} -> 3
    /// let g = AdjacencyList::from_arcs(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    /// let frontiers = dominators(&g, NodeId::new(0)).frontier();
    ///
    /// let df1 = frontiers.get(NodeId::new(1)).unwrap();
    /// assert!(df1.contains(&NodeId::new(3)));
    /// assert!(frontiers.get(NodeId::new(0)).unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn frontier(&self) -> DominanceFrontiers {
        let mut frontiers: Vec<Option<BTreeSet<NodeId>>> = self
            .immediate
            .iter()
            .map(|idom| idom.map(|_| BTreeSet::new()))
            .collect();

        for (b, preds) in self.predecessors.lists().iter().enumerate() {
            if preds.len() < 2 {
                continue;
            }
            let Some(idom_b) = self.immediate[b] else {
                continue;
            };

            for &pred in preds {
                let mut runner = pred;
                while runner != idom_b {
                    let Some(next) = self.immediate_dominator(runner) else {
                        break;
                    };
                    if let Some(Some(frontier)) = frontiers.get_mut(runner.index()) {
                        frontier.insert(NodeId::new(b));
                    }
                    runner = next;
                }
            }
        }

        DominanceFrontiers { frontiers }
    }
}

/// Iterator over dominators of a node, from the node up to the start node.
pub struct DominatorIterator<'a> {
    dominators: &'a Dominators,
    current: Option<NodeId>,
}

impl Iterator for DominatorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .dominators
            .immediate_dominator(current)
            .filter(|&idom| idom != current);
        Some(current)
    }
}

/// The dominance frontier of every node.
///
/// Nodes without an immediate dominator have no frontier at all (`None`), which is
/// distinct from an empty frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominanceFrontiers {
    frontiers: Vec<Option<BTreeSet<NodeId>>>,
}

impl DominanceFrontiers {
    /// Returns the frontier of `node`, or `None` if it has no immediate dominator.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.frontiers.get(node.index())?.as_ref()
    }

    /// Returns the number of nodes covered, reachable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frontiers.len()
    }

    /// Returns `true` if the graph had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frontiers.is_empty()
    }

    /// Iterates over the frontiers of the nodes that have one.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &BTreeSet<NodeId>)> {
        self.frontiers
            .iter()
            .enumerate()
            .filter_map(|(i, frontier)| frontier.as_ref().map(|f| (NodeId::new(i), f)))
    }
}

/// Computes immediate dominators from a precomputed transpose and postorder.
///
/// This is the core of the dominator engine. It computes dominators when given a
/// graph, its transpose and a postorder of the graph, and postdominators when given
/// the transpose, the original graph and a postorder of the transpose.
///
/// # Arguments
///
/// * `graph` - The graph whose node count sizes the result
/// * `predecessors` - The transpose of `graph`; it is copied into the result
/// * `postorder` - A postorder of a spanning tree of the subgraph reachable from
///   the start node, which must be its last entry
///
/// # Returns
///
/// The immediate dominators. An empty `postorder` yields a result in which every
/// node is unreachable.
///
/// # Caller Contract
///
/// Passing anything other than the true transpose, or an order that is not a
/// spanning-tree postorder, produces unspecified dominators. This is not checked.
pub fn dominators_with<G, T>(graph: &G, predecessors: &T, postorder: &[NodeId]) -> Dominators
where
    G: Successors,
    T: Successors,
{
    let order = graph.node_count();
    let predecessors = AdjacencyList::from_lists(
        (0..order)
            .map(|i| predecessors.successors(NodeId::new(i)).collect())
            .collect(),
    );

    let mut immediate: Vec<Option<NodeId>> = vec![None; order];
    let Some(&start) = postorder.last() else {
        return Dominators {
            start: None,
            immediate,
            predecessors,
        };
    };

    let mut position = vec![0usize; order];
    for (i, node) in postorder.iter().enumerate() {
        position[node.index()] = i;
    }
    immediate[start.index()] = Some(start);

    let intersect = |immediate: &[Option<NodeId>], mut b1: NodeId, mut b2: NodeId| {
        while b1 != b2 {
            while position[b1.index()] < position[b2.index()] {
                let Some(next) = immediate[b1.index()] else {
                    return b2;
                };
                b1 = next;
            }
            while position[b2.index()] < position[b1.index()] {
                let Some(next) = immediate[b2.index()] else {
                    return b1;
                };
                b2 = next;
            }
        }
        b1
    };

    let mut passes = 0usize;
    loop {
        passes += 1;
        let mut changed = false;

        for &b in postorder[..postorder.len() - 1].iter().rev() {
            let mut resolved = predecessors
                .arcs(b)
                .iter()
                .copied()
                .filter(|p| immediate[p.index()].is_some());

            // No resolved predecessor yet: leave b undefined for this pass
            let Some(first) = resolved.next() else {
                continue;
            };
            let idom = resolved.fold(first, |acc, p| intersect(&immediate, acc, p));

            if immediate[b.index()] != Some(idom) {
                immediate[b.index()] = Some(idom);
                changed = true;
            }
        }

        trace!(pass = passes, changed, "dominator pass");
        if !changed {
            break;
        }
    }

    debug!(
        nodes = order,
        reachable = postorder.len(),
        passes,
        "dominators complete"
    );

    Dominators {
        start: Some(start),
        immediate,
        predecessors,
    }
}

/// Computes the immediate dominator of every node reachable from `start`.
///
/// Builds the transpose and a depth-first postorder, then runs [`dominators_with`].
/// An out-of-range `start` yields a result in which every node is unreachable; use
/// [`try_dominators`] to reject it instead.
///
/// # Complexity
///
/// - Time: O(V + E) per pass; acyclic and reducible graphs converge in a few passes
/// - Space: O(V + E)
pub fn dominators<G: Successors>(graph: &G, start: NodeId) -> Dominators {
    let predecessors = transpose(graph);
    let order = postorder(graph, start);
    dominators_with(graph, &predecessors, &order)
}

/// Computes the immediate postdominator of every node that can reach `end`.
///
/// Runs the dominator core on the transpose of `graph`, with `graph` itself as the
/// predecessor source. [`Dominators::frontier`] on the result yields postdominance
/// frontiers.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::post_dominators, AdjacencyList, NodeId};
///
/// // Diamond: 0 -> {1, 2} -> 3
/// let g = AdjacencyList::from_arcs(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let pdoms = post_dominators(&g, NodeId::new(3));
///
/// assert_eq!(pdoms.immediate_dominator(NodeId::new(0)), Some(NodeId::new(3)));
/// ```
pub fn post_dominators<G: Successors>(graph: &G, end: NodeId) -> Dominators {
    let reversed = transpose(graph);
    let order = postorder(&reversed, end);
    dominators_with(&reversed, graph, &order)
}

/// Validating wrapper around [`dominators`].
///
/// # Errors
///
/// Returns [`crate::Error::EdgeOutOfRange`] if an arc leaves the graph and
/// [`crate::Error::NodeOutOfRange`] if `start` is not a node of the graph.
pub fn try_dominators<G: Successors>(graph: &G, start: NodeId) -> Result<Dominators> {
    validate_bounds(graph)?;
    validate_node(graph, start)?;
    Ok(dominators(graph, start))
}

/// Validating wrapper around [`post_dominators`].
///
/// # Errors
///
/// Returns [`crate::Error::EdgeOutOfRange`] if an arc leaves the graph and
/// [`crate::Error::NodeOutOfRange`] if `end` is not a node of the graph.
pub fn try_post_dominators<G: Successors>(graph: &G, end: NodeId) -> Result<Dominators> {
    validate_bounds(graph)?;
    validate_node(graph, end)?;
    Ok(post_dominators(graph, end))
}
