//! # adjgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the adjgraph library. Import this module to get quick access to the graph
//! representations and the algorithm entry points.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all validating operations
pub use crate::Error;

/// The result type used by the validating entry points
pub use crate::Result;

// ================================================================================================
// Graph Representation
// ================================================================================================

/// Node and label identifiers
pub use crate::graph::{Half, LabelId, NodeId};

/// The read-only graph abstraction every algorithm consumes
pub use crate::graph::{GraphBase, Successors};

/// Concrete adjacency list representations
pub use crate::graph::{AdjacencyList, LabeledAdjacencyList, Undirected};

/// Structural helpers
pub use crate::graph::{in_degrees, transpose};

/// Boundary validation
pub use crate::graph::validate::{validate_bounds, validate_reciprocal, validate_simple};

/// Node sets
pub use crate::utils::BitSet;

// ================================================================================================
// Strongly Connected Components
// ================================================================================================

/// SCC engines and results
pub use crate::graph::algorithms::{
    condensation, scc_with, strongly_connected_components, strongly_connected_components_forward,
    Condensation, SccAlgorithm,
};

// ================================================================================================
// Dominators
// ================================================================================================

/// Dominator and postdominator analysis
pub use crate::graph::algorithms::{
    dominators, post_dominators, try_dominators, try_post_dominators, DominanceFrontiers,
    Dominators,
};

// ================================================================================================
// Undirected Graph Analysis
// ================================================================================================

/// Degeneracy ordering and k-cores
pub use crate::graph::algorithms::{degeneracy, Degeneracy};

/// Maximal clique enumeration
pub use crate::graph::algorithms::{
    for_each_maximal_clique, maximal_cliques, CliqueAlgorithm, CliqueConfig, PivotKind,
    PivotStrategy,
};

// ================================================================================================
// Traversal
// ================================================================================================

/// Depth-first and breadth-first traversal
pub use crate::graph::algorithms::{bfs, dfs, postorder, reverse_postorder};
