// Copyright 2025 The adjgraph Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # adjgraph
//!
//! Graph algorithms over dense, index-addressed adjacency lists.
//!
//! A graph is an ordered sequence of nodes `0..order`, each owning an ordered list of
//! outgoing arcs. Directed and undirected graphs share that representation; an
//! undirected graph simply stores every edge as two reciprocal arcs. Arcs may carry an
//! integer label, and every algorithm runs unchanged on labeled and unlabeled graphs
//! because all of them are written against the [`graph::Successors`] trait.
//!
//! ## Features
//!
//! - **Strongly connected components** - Tarjan, Pearce and path-based engines, all
//!   iterative, with early termination and condensation graphs
//! - **Dominators** - Cooper/Harvey/Kennedy iterative dominators and postdominators,
//!   dominator-tree queries and dominance frontiers
//! - **Maximal cliques** - Bron-Kerbosch with and without pivoting, plus the
//!   degeneracy-ordered variant
//! - **Degeneracy** - k-degeneracy ordering, k-core boundaries and core numbers
//! - **Validation** - boundary checks that turn malformed input into [`Error`] values
//!   before it reaches an algorithm
//!
//! ## Quick Start
//!
//! ```rust
//! use adjgraph::prelude::*;
//!
//! // 0 -> 1 -> 2 -> 1
//! let mut g = AdjacencyList::with_order(3);
//! g.add_arc(NodeId::new(0), NodeId::new(1));
//! g.add_arc(NodeId::new(1), NodeId::new(2));
//! g.add_arc(NodeId::new(2), NodeId::new(1));
//!
//! let cond = condensation(&g);
//! assert_eq!(cond.components().len(), 2);
//! assert_eq!(cond.graph().arcs(NodeId::new(0)), &[NodeId::new(1)]);
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Node identifiers, graph traits, adjacency lists and validation
//! - [`graph::algorithms`] - The algorithm engines
//! - [`utils`] - The [`utils::BitSet`] node-set abstraction
//! - [`Error`] and [`Result`] - Error handling for the validating entry points
//!
//! ## Callbacks and Early Termination
//!
//! Streaming entry points hand each component or clique to a callback returning
//! [`std::ops::ControlFlow`]. Returning `ControlFlow::Break(())` stops the enumeration
//! once the current item is fully formed; the entry point then returns `Break(())` as
//! well. An early stop is a deliberately incomplete result, not an error.
//!
//! ## Logging
//!
//! The engines emit [`tracing`] events at `debug` and `trace` level. No subscriber is
//! installed by this crate.

pub(crate) mod error;

/// Shared fixtures which are used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use adjgraph::prelude::*;
///
/// let g = Undirected::from_edges(3, &[(0, 1), (1, 2)]);
/// let d = degeneracy(&g);
/// assert_eq!(d.k(), 1);
/// ```
pub mod prelude;

/// Graph representation, traits, validation and algorithms.
pub mod graph;

/// Shared utilities, most importantly the [`utils::BitSet`] node set.
pub mod utils;

/// `adjgraph` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`]. Only the validating entry points return it.
pub type Result<T> = std::result::Result<T, Error>;

/// `adjgraph` Error type
///
/// The main error type for all validating operations in this crate.
pub use error::Error;
