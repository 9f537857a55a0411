//! Adjacency-list graph representations.
//!
//! This module provides the two concrete graph types of the crate and the
//! undirected wrapper built on top of them:
//!
//! - [`AdjacencyList`] - one list of target nodes per node
//! - [`LabeledAdjacencyList`] - one list of [`Half`] arcs (target plus label) per node
//! - [`Undirected`] - a graph whose arcs come in reciprocal pairs
//!
//! Both list types implement [`Successors`], which is all the algorithm engines need.
//! Arc order inside a list is preserved exactly as inserted.
//!
//! # Loops and Parallel Arcs
//!
//! The representation permits loops (`n -> n`) and parallel arcs (`n -> m` more than
//! once). In an [`Undirected`] graph a loop is stored as a single arc that is its own
//! reciprocal, and it counts twice toward [`Undirected::degree`].

use crate::{
    graph::{
        validate::{validate_bounds, validate_reciprocal},
        GraphBase, Half, LabelId, NodeId, Successors,
    },
    Result,
};

/// A directed graph stored as one list of target nodes per node.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{AdjacencyList, NodeId};
///
/// let mut g = AdjacencyList::new();
/// let a = g.add_node();
/// let b = g.add_node();
/// g.add_arc(a, b);
///
/// assert_eq!(g.arcs(a), &[b]);
/// assert_eq!(g.transpose().arcs(b), &[a]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<NodeId>>,
}

impl AdjacencyList {
    /// Creates an empty graph with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `order` nodes and no arcs.
    #[must_use]
    pub fn with_order(order: usize) -> Self {
        Self {
            lists: vec![Vec::new(); order],
        }
    }

    /// Creates a graph from prebuilt adjacency lists.
    ///
    /// No validation happens here; use [`crate::graph::validate::validate_bounds`]
    /// when the lists come from an untrusted source.
    #[must_use]
    pub fn from_lists(lists: Vec<Vec<NodeId>>) -> Self {
        Self { lists }
    }

    /// Creates a graph of the given order from `(from, to)` index pairs.
    ///
    /// # Panics
    ///
    /// Panics if a `from` index is not below `order`.
    #[must_use]
    pub fn from_arcs(order: usize, arcs: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_order(order);
        for &(from, to) in arcs {
            graph.add_arc(NodeId::new(from), NodeId::new(to));
        }
        graph
    }

    /// Appends a node without arcs and returns its id.
    pub fn add_node(&mut self) -> NodeId {
        self.lists.push(Vec::new());
        NodeId::new(self.lists.len() - 1)
    }

    /// Appends the arc `from -> to` to the list of `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a node of this graph. The target is not checked.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId) {
        self.lists[from.index()].push(to);
    }

    /// Returns the targets of the arcs leaving `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn arcs(&self, node: NodeId) -> &[NodeId] {
        &self.lists[node.index()]
    }

    /// Returns the total number of arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Returns the graph with every arc reversed.
    ///
    /// Each list of the result is ordered by ascending source node.
    #[must_use]
    pub fn transpose(&self) -> AdjacencyList {
        transpose(self)
    }

    /// Returns the underlying adjacency lists.
    #[must_use]
    pub fn lists(&self) -> &[Vec<NodeId>] {
        &self.lists
    }
}

impl GraphBase for AdjacencyList {
    fn node_count(&self) -> usize {
        self.lists.len()
    }
}

impl Successors for AdjacencyList {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.lists[node.index()].iter().copied()
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.lists[node.index()].len()
    }
}

/// A directed graph whose arcs carry an integer label.
///
/// The algorithms ignore labels: this type implements [`Successors`] by projecting
/// each [`Half`] onto its target node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabeledAdjacencyList {
    lists: Vec<Vec<Half>>,
}

impl LabeledAdjacencyList {
    /// Creates an empty graph with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `order` nodes and no arcs.
    #[must_use]
    pub fn with_order(order: usize) -> Self {
        Self {
            lists: vec![Vec::new(); order],
        }
    }

    /// Creates a graph from prebuilt labeled adjacency lists.
    #[must_use]
    pub fn from_lists(lists: Vec<Vec<Half>>) -> Self {
        Self { lists }
    }

    /// Appends a node without arcs and returns its id.
    pub fn add_node(&mut self) -> NodeId {
        self.lists.push(Vec::new());
        NodeId::new(self.lists.len() - 1)
    }

    /// Appends the labeled arc `from -> to` to the list of `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a node of this graph.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId, label: LabelId) {
        self.lists[from.index()].push(Half::new(to, label));
    }

    /// Returns the half-arcs leaving `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn arcs(&self, node: NodeId) -> &[Half] {
        &self.lists[node.index()]
    }

    /// Returns the total number of arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Returns the graph with every arc reversed, keeping each arc's label.
    #[must_use]
    pub fn transpose(&self) -> LabeledAdjacencyList {
        let mut result = LabeledAdjacencyList::with_order(self.lists.len());
        for (from, halves) in self.lists.iter().enumerate() {
            for half in halves {
                result.lists[half.to.index()].push(Half::new(NodeId::new(from), half.label));
            }
        }
        result
    }

    /// Returns the underlying labeled adjacency lists.
    #[must_use]
    pub fn lists(&self) -> &[Vec<Half>] {
        &self.lists
    }

    /// Returns a copy of this graph with all labels dropped.
    #[must_use]
    pub fn unlabeled(&self) -> AdjacencyList {
        AdjacencyList::from_lists(
            self.lists
                .iter()
                .map(|halves| halves.iter().map(|half| half.to).collect())
                .collect(),
        )
    }
}

impl GraphBase for LabeledAdjacencyList {
    fn node_count(&self) -> usize {
        self.lists.len()
    }
}

impl Successors for LabeledAdjacencyList {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.lists[node.index()].iter().map(|half| half.to)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.lists[node.index()].len()
    }
}

/// Returns the transpose of any graph as an unlabeled [`AdjacencyList`].
///
/// The transpose has an arc `to -> from` for every arc `from -> to` of `graph`,
/// parallel arcs and loops included. Lists are ordered by ascending source.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
pub fn transpose<G: Successors>(graph: &G) -> AdjacencyList {
    let mut result = AdjacencyList::with_order(graph.node_count());
    for from in graph.node_ids() {
        for to in graph.successors(from) {
            result.lists[to.index()].push(from);
        }
    }
    result
}

/// Returns the number of arcs entering each node.
pub fn in_degrees<G: Successors>(graph: &G) -> Vec<usize> {
    let mut degrees = vec![0; graph.node_count()];
    for node in graph.node_ids() {
        for to in graph.successors(node) {
            degrees[to.index()] += 1;
        }
    }
    degrees
}

/// An undirected graph: a directed graph in which every arc has a reciprocal.
///
/// An edge `a - b` is stored as the two arcs `a -> b` and `b -> a`; a loop `a - a`
/// is stored as a single arc. [`Undirected::new`] checks this invariant,
/// [`Undirected::new_unchecked`] trusts the caller.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{NodeId, Undirected};
///
/// // Triangle 0-1-2 with a loop on 2
/// let g = Undirected::from_edges(3, &[(0, 1), (1, 2), (2, 0), (2, 2)]);
///
/// assert_eq!(g.degree(NodeId::new(0)), 2);
/// assert_eq!(g.degree(NodeId::new(2)), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Undirected<G> {
    graph: G,
}

impl<G: Successors> Undirected<G> {
    /// Wraps `graph` after checking that every arc is in range and has a reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EdgeOutOfRange`] if an arc leaves the graph and
    /// [`crate::Error::NotReciprocal`] if an arc has no matching reverse arc.
    pub fn new(graph: G) -> Result<Self> {
        validate_bounds(&graph)?;
        validate_reciprocal(&graph)?;
        Ok(Self { graph })
    }

    /// Wraps `graph` without checking the reciprocal invariant.
    ///
    /// Algorithms given a graph that breaks the invariant produce unspecified
    /// (but memory-safe) results.
    #[must_use]
    pub fn new_unchecked(graph: G) -> Self {
        Self { graph }
    }

    /// Returns the wrapped directed graph.
    #[must_use]
    pub fn inner(&self) -> &G {
        &self.graph
    }

    /// Unwraps the directed graph.
    #[must_use]
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Returns the degree of `node`, counting a loop twice.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.graph
            .successors(node)
            .map(|to| if to == node { 2 } else { 1 })
            .sum()
    }
}

impl Undirected<AdjacencyList> {
    /// Creates an undirected graph with `order` nodes and no edges.
    #[must_use]
    pub fn with_order(order: usize) -> Self {
        Self {
            graph: AdjacencyList::with_order(order),
        }
    }

    /// Creates an undirected graph from `(a, b)` index pairs, one pair per edge.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below `order`.
    #[must_use]
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_order(order);
        for &(a, b) in edges {
            graph.add_edge(NodeId::new(a), NodeId::new(b));
        }
        graph
    }

    /// Adds the edge `a - b` as two reciprocal arcs, or one arc when `a == b`.
    ///
    /// # Panics
    ///
    /// Panics if either node is not a node of this graph.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        assert!(b.index() < self.graph.node_count(), "node out of range");
        self.graph.add_arc(a, b);
        if a != b {
            self.graph.add_arc(b, a);
        }
    }
}

impl Undirected<LabeledAdjacencyList> {
    /// Creates a labeled undirected graph with `order` nodes and no edges.
    #[must_use]
    pub fn with_order(order: usize) -> Self {
        Self {
            graph: LabeledAdjacencyList::with_order(order),
        }
    }

    /// Adds the labeled edge `a - b`; both halves carry `label`.
    ///
    /// # Panics
    ///
    /// Panics if either node is not a node of this graph.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, label: LabelId) {
        assert!(b.index() < self.graph.node_count(), "node out of range");
        self.graph.add_arc(a, b, label);
        if a != b {
            self.graph.add_arc(b, a, label);
        }
    }
}

impl<G: GraphBase> GraphBase for Undirected<G> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

impl<G: Successors> Successors for Undirected<G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.graph.out_degree(node)
    }
}
