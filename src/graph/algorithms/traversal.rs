//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversals from a start
//! node. They are the building blocks of the dominator engine, which needs a
//! postorder of a spanning tree of the subgraph reachable from its start node.
//!
//! # Algorithms
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`postorder`] - Depth-first search with post-order visitation
//! - [`reverse_postorder`] - Reverse post-order (useful for forward data flow)
//!
//! # Iteration vs Collection
//!
//! The [`dfs`] and [`bfs`] functions return iterators for lazy evaluation,
//! avoiding unnecessary allocations when only partial traversal is needed.
//! The [`postorder`] and [`reverse_postorder`] functions return collected
//! vectors since the order requires full traversal anyway.
//!
//! All traversals use explicit stacks or queues, so path length is bounded only
//! by memory and never by the native call stack.

use std::collections::VecDeque;

use crate::{
    graph::{NodeId, Successors},
    utils::BitSet,
};

/// Depth-first search iterator over graph nodes.
///
/// Visits each node reachable from the start exactly once, in pre-order.
/// Successors are visited in list order.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: BitSet,
    scratch: Vec<NodeId>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        let mut visited = BitSet::new(node_count);
        let mut stack = Vec::new();
        if start.index() < node_count {
            visited.insert(start.index());
            stack.push(start);
        }

        DfsIterator {
            graph,
            stack,
            visited,
            scratch: Vec::new(),
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push unvisited successors in reverse order
        // so that they are visited in the original order
        self.scratch.clear();
        self.scratch.extend(self.graph.successors(node));
        for &succ in self.scratch.iter().rev() {
            if !self.visited.contains(succ.index()) {
                self.visited.insert(succ.index());
                self.stack.push(succ);
            }
        }

        Some(node)
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// Nodes not reachable from `start` are not visited. An out-of-range start
/// yields an empty iterator.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and stack
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::dfs, AdjacencyList, NodeId};
///
/// // 0 -> 1 -> 2, 3 unreachable
/// let g = AdjacencyList::from_arcs(4, &[(0, 1), (1, 2)]);
///
/// let order: Vec<NodeId> = dfs(&g, NodeId::new(0)).collect();
/// assert_eq!(order, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph nodes.
///
/// Visits each reachable node exactly once, exploring all nodes at distance d
/// before visiting any node at distance d+1.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: BitSet,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        let mut visited = BitSet::new(node_count);
        let mut queue = VecDeque::new();
        if start.index() < node_count {
            visited.insert(start.index());
            queue.push_back(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.visited.contains(succ.index()) {
                self.visited.insert(succ.index());
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Computes the postorder traversal of nodes reachable from the start.
///
/// In postorder, a node is visited after all its depth-first descendants. The
/// result is the postorder of a depth-first spanning tree, so `start` is always
/// the last entry. This is exactly the input the dominator engine expects.
///
/// # Returns
///
/// A vector of `NodeId` in postorder, empty if `start` is out of range.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::postorder, AdjacencyList, NodeId};
///
/// let g = AdjacencyList::from_arcs(3, &[(0, 1), (1, 2)]);
///
/// let order = postorder(&g, NodeId::new(0));
/// assert_eq!(order, vec![NodeId::new(2), NodeId::new(1), NodeId::new(0)]);
/// ```
#[allow(clippy::items_after_statements)]
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Vec::new();
    }

    let mut visited = BitSet::new(node_count);
    let mut result = Vec::with_capacity(node_count);
    let mut successors = Vec::new();

    // Iterative postorder using explicit stack with state
    #[derive(Clone, Copy)]
    enum State {
        Enter,
        Exit,
    }

    let mut stack = vec![(start, State::Enter)];

    while let Some((node, state)) = stack.pop() {
        match state {
            State::Enter => {
                if visited.contains(node.index()) {
                    continue;
                }
                visited.insert(node.index());

                // Exit is processed after all children pushed above it
                stack.push((node, State::Exit));

                successors.clear();
                successors.extend(graph.successors(node));
                for &succ in successors.iter().rev() {
                    if !visited.contains(succ.index()) {
                        stack.push((succ, State::Enter));
                    }
                }
            }
            State::Exit => {
                result.push(node);
            }
        }
    }

    result
}

/// Computes the reverse postorder traversal of nodes reachable from the start.
///
/// In an acyclic graph every node comes before all of its successors.
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}
