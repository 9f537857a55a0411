//! Degeneracy ordering and k-cores of undirected graphs.
//!
//! The degeneracy of a graph is the smallest `k` such that every subgraph has a
//! node of degree at most `k`. Repeatedly removing a node of minimum remaining
//! degree yields a *degeneracy ordering*, and the largest degree seen at removal
//! time is exactly `k`.
//!
//! The same ordering also exposes every k-core (the maximal subgraph in which
//! every node has degree at least k): the j-core is a suffix of the ordering.
//!
//! # Algorithm
//!
//! Matula and Beck's bucket algorithm. Nodes sit in buckets indexed by their
//! remaining degree. Each step pops a node from the lowest non-empty bucket and
//! moves each still-present neighbor one bucket down. A per-node position index
//! makes every bucket move an O(1) swap-remove. The bucket search resumes at the
//! lowest bucket a neighbor was moved into. On simple graphs that is at most one
//! below the last bucket used, but parallel edges can drop a neighbor further.

use tracing::debug;

use crate::{
    graph::{GraphBase, NodeId, Successors, Undirected},
    utils::BitSet,
};

/// Result of [`degeneracy`]: the degeneracy, the ordering and the k-core boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degeneracy {
    k: usize,
    ordering: Vec<NodeId>,
    core_starts: Vec<usize>,
}

impl Degeneracy {
    /// Returns the degeneracy `k`.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the nodes in removal order.
    #[must_use]
    pub fn ordering(&self) -> &[NodeId] {
        &self.ordering
    }

    /// Returns the k-core boundaries.
    ///
    /// `core_starts()[j]`, for `j` in `0..=k`, is the index into
    /// [`Degeneracy::ordering`] at which the j-core begins. The sequence is
    /// non-decreasing and starts with 0.
    #[must_use]
    pub fn core_starts(&self) -> &[usize] {
        &self.core_starts
    }

    /// Returns the nodes of the j-core, or an empty slice if `j > k`.
    #[must_use]
    pub fn core(&self, j: usize) -> &[NodeId] {
        match self.core_starts.get(j) {
            Some(&start) => &self.ordering[start..],
            None => &[],
        }
    }

    /// Returns the core number of every node: the largest j such that the node
    /// belongs to the j-core.
    #[must_use]
    pub fn core_numbers(&self) -> Vec<usize> {
        let mut numbers = vec![0; self.ordering.len()];
        for (j, &start) in self.core_starts.iter().enumerate() {
            for node in &self.ordering[start..] {
                numbers[node.index()] = j;
            }
        }
        numbers
    }
}

/// Computes a degeneracy ordering and the k-core boundaries of an undirected graph.
///
/// Degrees are arc counts, so a loop contributes one to its node and is ignored
/// once the node is removed. Simple graphs are unaffected by this.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::degeneracy, NodeId, Undirected};
///
/// // Triangle 0-1-2 with pendant 3
/// let g = Undirected::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
/// let d = degeneracy(&g);
///
/// assert_eq!(d.k(), 2);
/// assert_eq!(d.ordering()[0], NodeId::new(3));
/// assert_eq!(d.core(2).len(), 3);
/// assert_eq!(d.core_numbers(), vec![2, 2, 2, 1]);
/// ```
pub fn degeneracy<G: Successors>(graph: &Undirected<G>) -> Degeneracy {
    let order = graph.node_count();
    let mut degree: Vec<usize> = graph.node_ids().map(|n| graph.out_degree(n)).collect();
    let max_degree = degree.iter().copied().max().unwrap_or(0);

    let mut buckets: Vec<Vec<NodeId>> = vec![Vec::new(); max_degree + 1];
    let mut slot = vec![0; order];
    for node in graph.node_ids() {
        let bucket = &mut buckets[degree[node.index()]];
        slot[node.index()] = bucket.len();
        bucket.push(node);
    }

    let mut removed = BitSet::new(order);
    let mut ordering = Vec::with_capacity(order);
    let mut core_starts = vec![0];
    let mut k = 0;
    let mut i = 0;

    for ox in 0..order {
        while buckets.get(i).is_some_and(Vec::is_empty) {
            i += 1;
        }
        let Some(v) = buckets.get_mut(i).and_then(Vec::pop) else {
            break;
        };

        if i > k {
            core_starts.resize(i + 1, ox);
            k = i;
        }

        ordering.push(v);
        removed.insert(v.index());

        let mut next = i;
        for nb in graph.successors(v) {
            if removed.contains(nb.index()) {
                continue;
            }
            let d = degree[nb.index()];
            let Some(lower) = d.checked_sub(1) else {
                continue;
            };

            let s = slot[nb.index()];
            buckets[d].swap_remove(s);
            if let Some(&moved) = buckets[d].get(s) {
                slot[moved.index()] = s;
            }

            degree[nb.index()] = lower;
            slot[nb.index()] = buckets[lower].len();
            buckets[lower].push(nb);
            next = next.min(lower);
        }

        i = next;
    }

    debug!(nodes = order, k, "degeneracy ordering complete");

    Degeneracy {
        k,
        ordering,
        core_starts,
    }
}
