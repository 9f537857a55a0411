//! Graph algorithms over [`Successors`](crate::graph::Successors) graphs.
//!
//! Every engine here is iterative, driven by explicit stacks, so recursion depth is
//! bounded by memory rather than by the native call stack. Engines that enumerate
//! sets (components, cliques) stream them to a callback returning
//! [`ControlFlow`](std::ops::ControlFlow), which lets the caller stop early.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs`] - Breadth-first search traversal
//! - [`postorder`] - Postorder traversal
//! - [`reverse_postorder`] - Reverse postorder traversal
//!
//! ## Strongly Connected Components
//!
//! - [`scc_tarjan`], [`scc_pearce`], [`scc_path_based`] - the three engines
//! - [`strongly_connected_components`] - collected, in reverse topological order
//! - [`condensation`] - the component DAG
//!
//! ## Dominator Analysis
//!
//! - [`dominators`] / [`post_dominators`] - Cooper, Harvey and Kennedy
//! - [`Dominators::frontier`] - dominance frontiers
//!
//! ## Undirected Graphs
//!
//! - [`degeneracy`] - degeneracy ordering and k-cores
//! - [`bron_kerbosch1`], [`bron_kerbosch2`], [`bron_kerbosch3`] - maximal cliques
//! - [`maximal_cliques`] - validated and collected
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | SCC | O(V + E) | Cycle structure, condensation |
//! | Dominators | O(V + E) per pass, few passes in practice | Control flow analysis |
//! | Degeneracy | O(V + E) | Sparsity measure, clique ordering |
//! | Bron-Kerbosch | O(3^(V/3)) worst case | Maximal cliques |
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::graph::{algorithms, AdjacencyList, NodeId};
//!
//! // 0 -> 1 -> 2 -> 1
//! let g = AdjacencyList::from_arcs(3, &[(0, 1), (1, 2), (2, 1)]);
//!
//! let sccs = algorithms::strongly_connected_components(&g);
//! assert_eq!(sccs.len(), 2);
//!
//! let doms = algorithms::dominators(&g, NodeId::new(0));
//! assert_eq!(doms.immediate_dominator(NodeId::new(2)), Some(NodeId::new(1)));
//! ```

mod clique;
mod degeneracy;
mod dominators;
mod scc;
mod traversal;

pub use clique::{
    bron_kerbosch1, bron_kerbosch2, bron_kerbosch3, for_each_maximal_clique, maximal_cliques,
    CliqueAlgorithm, CliqueConfig, MaxDegreePivot, MinCandidatePivot, PivotKind, PivotStrategy,
};
pub use degeneracy::{degeneracy, Degeneracy};
pub use dominators::{
    dominators, dominators_with, post_dominators, try_dominators, try_post_dominators,
    DominanceFrontiers, DominatorIterator, Dominators,
};
pub use scc::{
    condensation, scc_path_based, scc_pearce, scc_tarjan, scc_with,
    strongly_connected_components, strongly_connected_components_forward, Condensation,
    SccAlgorithm,
};
pub use traversal::{bfs, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator};
