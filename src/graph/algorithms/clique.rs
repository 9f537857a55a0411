//! Maximal clique enumeration with the Bron-Kerbosch family of algorithms.
//!
//! A clique is a set of mutually adjacent nodes; it is maximal when no further node
//! is adjacent to all of its members. The engines here enumerate every maximal
//! clique of an undirected graph exactly once.
//!
//! # Variants
//!
//! - [`bron_kerbosch1`] - the classic algorithm, branching on every candidate
//! - [`bron_kerbosch2`] - with pivoting: skips candidates adjacent to a pivot node
//! - [`bron_kerbosch3`] - pivoting plus an outer loop in degeneracy order, which
//!   bounds the top-level branching factor by the degeneracy of the graph
//!
//! All three emit the same set of cliques and differ only in order and speed.
//! Pivot selection is pluggable through [`PivotStrategy`].
//!
//! # Preconditions
//!
//! The graph must be simple: no loops and no parallel edges. The raw engines do not
//! check this and produce unspecified cliques otherwise. [`maximal_cliques`] and
//! [`for_each_maximal_clique`] validate first and report violations as errors.
//!
//! # Implementation
//!
//! The recursion over `(R, P, X)` runs on an explicit stack of frames, one per
//! clique size, so large cliques never exhaust the native call stack. The working
//! sets are [`BitSet`]s sized to the graph.

use std::ops::ControlFlow;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::{
    graph::{
        algorithms::degeneracy::degeneracy,
        validate::{validate_bounds, validate_simple},
        GraphBase, NodeId, Successors, Undirected,
    },
    utils::BitSet,
    Result,
};

/// Chooses the pivot node of one branching step.
///
/// `candidates` is the set P of nodes that could extend the current clique and is
/// never empty when the engines call this; `excluded` is the set X of nodes already
/// explored at this level. The returned node should be a member of P or X. The
/// engine then branches only on the candidates that are not adjacent to it.
///
/// Returning `None` disables pivoting for this step, so every candidate is
/// branched on.
///
/// Closures of type `FnMut(&BitSet, &BitSet) -> Option<NodeId>` implement this
/// trait.
pub trait PivotStrategy {
    /// Returns the pivot for the given candidate and excluded sets.
    fn choose(&mut self, candidates: &BitSet, excluded: &BitSet) -> Option<NodeId>;
}

impl<F> PivotStrategy for F
where
    F: FnMut(&BitSet, &BitSet) -> Option<NodeId>,
{
    fn choose(&mut self, candidates: &BitSet, excluded: &BitSet) -> Option<NodeId> {
        self(candidates, excluded)
    }
}

/// Picks the node of P ∪ X with the highest degree in the whole graph.
///
/// P is scanned before X, each in ascending order, and the first node reaching the
/// maximum wins. A well-connected pivot removes many candidates from branching.
pub struct MaxDegreePivot<'g, G> {
    graph: &'g Undirected<G>,
}

impl<'g, G: Successors> MaxDegreePivot<'g, G> {
    /// Creates the strategy for `graph`.
    #[must_use]
    pub fn new(graph: &'g Undirected<G>) -> Self {
        Self { graph }
    }
}

impl<G: Successors> PivotStrategy for MaxDegreePivot<'_, G> {
    fn choose(&mut self, candidates: &BitSet, excluded: &BitSet) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for index in candidates.iter().chain(excluded.iter()) {
            let node = NodeId::new(index);
            let degree = self.graph.out_degree(node);
            if best.map_or(true, |(_, max)| degree > max) {
                best = Some((node, degree));
            }
        }
        best.map(|(node, _)| node)
    }
}

/// Picks the smallest member of P. A cheap baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinCandidatePivot;

impl PivotStrategy for MinCandidatePivot {
    fn choose(&mut self, candidates: &BitSet, _excluded: &BitSet) -> Option<NodeId> {
        candidates.first().map(NodeId::new)
    }
}

/// Selects a built-in [`PivotStrategy`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PivotKind {
    /// [`MaxDegreePivot`]
    #[default]
    MaxDegree,
    /// [`MinCandidatePivot`]
    MinCandidate,
}

/// Selects a Bron-Kerbosch variant.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CliqueAlgorithm {
    /// [`bron_kerbosch1`], no pivoting
    Plain,
    /// [`bron_kerbosch2`], pivoting
    Pivot,
    /// [`bron_kerbosch3`], pivoting with a degeneracy-ordered outer loop
    #[default]
    Degeneracy,
}

/// Configuration for [`maximal_cliques`] and [`for_each_maximal_clique`].
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::algorithms::{CliqueAlgorithm, CliqueConfig, PivotKind};
///
/// let config = CliqueConfig::default()
///     .with_algorithm("pivot".parse().unwrap())
///     .with_pivot(PivotKind::MinCandidate);
/// assert_eq!(config.algorithm, CliqueAlgorithm::Pivot);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CliqueConfig {
    /// The Bron-Kerbosch variant to run
    pub algorithm: CliqueAlgorithm,
    /// The pivot strategy; ignored by [`CliqueAlgorithm::Plain`]
    pub pivot: PivotKind,
}

impl CliqueConfig {
    /// Returns the configuration with `algorithm` selected.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: CliqueAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configuration with `pivot` selected.
    #[must_use]
    pub fn with_pivot(mut self, pivot: PivotKind) -> Self {
        self.pivot = pivot;
        self
    }
}

/// One level of the `(R, P, X)` recursion.
struct Frame {
    candidates: BitSet,
    excluded: BitSet,
    /// Nodes still to branch on at this level
    branches: BitSet,
    next: usize,
    /// Node whose subtree is currently being explored
    active: Option<NodeId>,
}

/// Shared state of one enumeration run.
struct Search<'a, G, F> {
    graph: &'a Undirected<G>,
    emit: F,
    clique: Vec<NodeId>,
    sorted: Vec<NodeId>,
    emitted: usize,
}

impl<G, F> Search<'_, G, F>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    /// Returns `set ∩ N(node)`.
    fn restrict(&self, set: &BitSet, node: NodeId) -> BitSet {
        let mut result = BitSet::new(set.len());
        for nb in self.graph.successors(node) {
            if set.contains(nb.index()) {
                result.insert(nb.index());
            }
        }
        result
    }

    /// Returns the nodes of `candidates` to branch on.
    fn branches(
        &self,
        candidates: &BitSet,
        excluded: &BitSet,
        pivot: &mut Option<&mut dyn PivotStrategy>,
    ) -> BitSet {
        let mut branches = candidates.clone();
        if let Some(u) = pivot.as_mut().and_then(|p| p.choose(candidates, excluded)) {
            for nb in self.graph.successors(u) {
                branches.remove(nb.index());
            }
        }
        branches
    }

    fn report(&mut self) -> ControlFlow<()> {
        self.sorted.clear();
        self.sorted.extend_from_slice(&self.clique);
        self.sorted.sort_unstable();
        self.emitted += 1;
        (self.emit)(&self.sorted)
    }

    /// Enumerates the maximal cliques extending `self.clique` within `candidates`,
    /// skipping those that `excluded` shows were already found.
    fn expand(
        &mut self,
        candidates: BitSet,
        excluded: BitSet,
        mut pivot: Option<&mut dyn PivotStrategy>,
    ) -> ControlFlow<()> {
        if candidates.is_empty() {
            if excluded.is_empty() {
                return self.report();
            }
            return ControlFlow::Continue(());
        }

        let base = self.clique.len();
        let branches = self.branches(&candidates, &excluded, &mut pivot);
        let mut stack = vec![Frame {
            candidates,
            excluded,
            branches,
            next: 0,
            active: None,
        }];

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };

            // A finished subtree moves its node from P to X
            if let Some(done) = frame.active.take() {
                frame.candidates.remove(done.index());
                frame.excluded.insert(done.index());
                self.clique.pop();
            }

            let Some(index) = frame.branches.next_set(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next = index + 1;
            let node = NodeId::new(index);

            let p2 = self.restrict(&frame.candidates, node);
            let x2 = self.restrict(&frame.excluded, node);
            self.clique.push(node);

            if p2.is_empty() {
                let flow = if x2.is_empty() {
                    self.report()
                } else {
                    ControlFlow::Continue(())
                };
                self.clique.pop();
                if flow.is_break() {
                    self.clique.truncate(base);
                    return flow;
                }
                if let Some(frame) = stack.last_mut() {
                    frame.candidates.remove(index);
                    frame.excluded.insert(index);
                }
                continue;
            }

            if let Some(frame) = stack.last_mut() {
                frame.active = Some(node);
            }
            let branches = self.branches(&p2, &x2, &mut pivot);
            stack.push(Frame {
                candidates: p2,
                excluded: x2,
                branches,
                next: 0,
                active: None,
            });
        }

        ControlFlow::Continue(())
    }
}

fn search<G, F>(graph: &Undirected<G>, emit: F) -> Search<'_, G, F> {
    Search {
        graph,
        emit,
        clique: Vec::new(),
        sorted: Vec::new(),
        emitted: 0,
    }
}

fn finish(variant: &str, emitted: usize, flow: ControlFlow<()>) -> ControlFlow<()> {
    if flow.is_break() {
        debug!(variant, cliques = emitted, "clique enumeration stopped by callback");
    } else {
        debug!(variant, cliques = emitted, "clique enumeration complete");
    }
    flow
}

/// Enumerates all maximal cliques with the classic Bron-Kerbosch algorithm.
///
/// Each clique is passed to `emit` as an ascending slice of node ids. A graph with
/// no nodes has no cliques.
///
/// # Returns
///
/// `ControlFlow::Break(())` if `emit` stopped the enumeration, otherwise
/// `ControlFlow::Continue(())`.
///
/// # Preconditions
///
/// `graph` must be simple. This is not checked.
///
/// # Examples
///
/// ```rust
/// use std::ops::ControlFlow;
/// use adjgraph::graph::{algorithms::bron_kerbosch1, Undirected};
///
/// // Triangle 0-1-2 with pendant 3
/// let g = Undirected::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
///
/// let mut cliques = Vec::new();
/// let _ = bron_kerbosch1(&g, |c| {
///     cliques.push(c.iter().map(|n| n.index()).collect::<Vec<_>>());
///     ControlFlow::Continue(())
/// });
/// assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3]]);
/// ```
pub fn bron_kerbosch1<G, F>(graph: &Undirected<G>, emit: F) -> ControlFlow<()>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    let order = graph.node_count();
    if order == 0 {
        return ControlFlow::Continue(());
    }

    let mut search = search(graph, emit);
    let flow = search.expand(BitSet::full(order), BitSet::new(order), None);
    finish("bron-kerbosch1", search.emitted, flow)
}

/// Enumerates all maximal cliques with Bron-Kerbosch and pivoting.
///
/// At every level `pivot` chooses a node u from P ∪ X and only the candidates not
/// adjacent to u are branched on, since any maximal clique must contain u or a
/// non-neighbor of u.
///
/// Emission and preconditions are the same as [`bron_kerbosch1`].
pub fn bron_kerbosch2<G, S, F>(graph: &Undirected<G>, mut pivot: S, emit: F) -> ControlFlow<()>
where
    G: Successors,
    S: PivotStrategy,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    let order = graph.node_count();
    if order == 0 {
        return ControlFlow::Continue(());
    }

    let mut search = search(graph, emit);
    let flow = search.expand(BitSet::full(order), BitSet::new(order), Some(&mut pivot));
    finish("bron-kerbosch2", search.emitted, flow)
}

/// Enumerates all maximal cliques with pivoting and a degeneracy-ordered outer loop.
///
/// The first member of each clique is chosen in degeneracy order (see
/// [`degeneracy`]); each such choice restricts P and X to that node's neighbors,
/// and the pivoted recursion of [`bron_kerbosch2`] handles the rest. On sparse
/// graphs this bounds the top-level branching factor by the degeneracy.
///
/// Emission and preconditions are the same as [`bron_kerbosch1`].
pub fn bron_kerbosch3<G, S, F>(graph: &Undirected<G>, mut pivot: S, emit: F) -> ControlFlow<()>
where
    G: Successors,
    S: PivotStrategy,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    let order = graph.node_count();
    let mut candidates = BitSet::full(order);
    let mut excluded = BitSet::new(order);
    let mut search = search(graph, emit);

    for &node in degeneracy(graph).ordering() {
        let p2 = search.restrict(&candidates, node);
        let x2 = search.restrict(&excluded, node);

        search.clique.push(node);
        let flow = search.expand(p2, x2, Some(&mut pivot));
        search.clique.pop();
        if flow.is_break() {
            return finish("bron-kerbosch3", search.emitted, flow);
        }

        candidates.remove(node.index());
        excluded.insert(node.index());
    }

    finish("bron-kerbosch3", search.emitted, ControlFlow::Continue(()))
}

/// Validates `graph` and streams its maximal cliques with the configured engine.
///
/// # Errors
///
/// Returns [`crate::Error::EdgeOutOfRange`] if an arc leaves the graph,
/// [`crate::Error::Loop`] if the graph has a loop and
/// [`crate::Error::ParallelEdge`] if it has parallel edges. Nothing is emitted in
/// that case.
pub fn for_each_maximal_clique<G, F>(
    graph: &Undirected<G>,
    config: &CliqueConfig,
    emit: F,
) -> Result<ControlFlow<()>>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    validate_bounds(graph)?;
    validate_simple(graph)?;

    let flow = match (config.algorithm, config.pivot) {
        (CliqueAlgorithm::Plain, _) => bron_kerbosch1(graph, emit),
        (CliqueAlgorithm::Pivot, PivotKind::MaxDegree) => {
            bron_kerbosch2(graph, MaxDegreePivot::new(graph), emit)
        }
        (CliqueAlgorithm::Pivot, PivotKind::MinCandidate) => {
            bron_kerbosch2(graph, MinCandidatePivot, emit)
        }
        (CliqueAlgorithm::Degeneracy, PivotKind::MaxDegree) => {
            bron_kerbosch3(graph, MaxDegreePivot::new(graph), emit)
        }
        (CliqueAlgorithm::Degeneracy, PivotKind::MinCandidate) => {
            bron_kerbosch3(graph, MinCandidatePivot, emit)
        }
    };
    Ok(flow)
}

/// Validates `graph` and collects all of its maximal cliques.
///
/// Each clique is sorted ascending; the order of the cliques depends on the
/// configured engine.
///
/// # Errors
///
/// Same as [`for_each_maximal_clique`].
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Error, graph::{algorithms::{maximal_cliques, CliqueConfig}, NodeId, Undirected}};
///
/// let g = Undirected::from_edges(3, &[(0, 1), (1, 2)]);
/// let cliques = maximal_cliques(&g, &CliqueConfig::default())?;
/// assert_eq!(cliques.len(), 2);
///
/// let looped = Undirected::from_edges(1, &[(0, 0)]);
/// assert_eq!(
///     maximal_cliques(&looped, &CliqueConfig::default()),
///     Err(Error::Loop(NodeId::new(0)))
/// );
/// # Ok::<(), Error>(())
/// ```
pub fn maximal_cliques<G: Successors>(
    graph: &Undirected<G>,
    config: &CliqueConfig,
) -> Result<Vec<Vec<NodeId>>> {
    let mut cliques = Vec::new();
    let _ = for_each_maximal_clique(graph, config, |clique| {
        cliques.push(clique.to_vec());
        ControlFlow::Continue(())
    })?;
    Ok(cliques)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        graph::{AdjacencyList, LabelId, LabeledAdjacencyList},
        test::{ids, n, normalized, undirected},
        Error,
    };

    fn all_configs() -> Vec<CliqueConfig> {
        let mut configs = Vec::new();
        for algorithm in CliqueAlgorithm::iter() {
            for pivot in PivotKind::iter() {
                configs.push(
                    CliqueConfig::default()
                        .with_algorithm(algorithm)
                        .with_pivot(pivot),
                );
            }
        }
        configs
    }

    fn cliques_of(graph: &Undirected<AdjacencyList>) -> Vec<Vec<Vec<NodeId>>> {
        all_configs()
            .iter()
            .map(|config| normalized(maximal_cliques(graph, config).unwrap()))
            .collect()
    }

    #[test]
    fn test_clique_triangle_with_pendant() {
        //   0
        //  / \
        // 1---2---3
        let g = undirected(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
        for cliques in cliques_of(&g) {
            assert_eq!(cliques, vec![ids(&[0, 1, 2]), ids(&[2, 3])]);
        }
    }

    #[test]
    fn test_clique_empty_graph() {
        for cliques in cliques_of(&undirected(0, &[])) {
            assert!(cliques.is_empty());
        }
    }

    #[test]
    fn test_clique_isolated_nodes() {
        let g = undirected(3, &[(0, 1)]);
        for cliques in cliques_of(&g) {
            assert_eq!(cliques, vec![ids(&[0, 1]), ids(&[2])]);
        }
    }

    #[test]
    fn test_clique_complete_graph() {
        let mut edges = Vec::new();
        for a in 0..6 {
            for b in a + 1..6 {
                edges.push((a, b));
            }
        }
        let g = undirected(6, &edges);
        for cliques in cliques_of(&g) {
            assert_eq!(cliques, vec![ids(&[0, 1, 2, 3, 4, 5])]);
        }
    }

    #[test]
    fn test_clique_complete_tripartite() {
        // K(3,3,3): parts {0,1,2}, {3,4,5}, {6,7,8}; one node from each part
        let mut edges = Vec::new();
        for a in 0..9 {
            for b in a + 1..9 {
                if a / 3 != b / 3 {
                    edges.push((a, b));
                }
            }
        }
        let g = undirected(9, &edges);
        for cliques in cliques_of(&g) {
            assert_eq!(cliques.len(), 27);
            assert!(cliques.iter().all(|c| c.len() == 3));
        }
    }

    #[test]
    fn test_clique_emitted_sorted() {
        // Edges given out of order still produce ascending cliques
        let g = undirected(4, &[(3, 1), (1, 2), (2, 3)]);
        let _ = bron_kerbosch3(&g, MaxDegreePivot::new(&g), |c| {
            assert!(c.windows(2).all(|w| w[0] < w[1]));
            ControlFlow::Continue(())
        });
    }

    #[test]
    fn test_clique_early_stop() {
        // Three disjoint edges, three cliques
        let g = undirected(6, &[(0, 1), (2, 3), (4, 5)]);
        let mut seen = 0;
        let flow = bron_kerbosch2(&g, MinCandidatePivot, |_| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 2);

        seen = 0;
        let flow = bron_kerbosch3(&g, MinCandidatePivot, |_| {
            seen += 1;
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_clique_early_stop_plain() {
        let g = undirected(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
        let mut found = Vec::new();
        let flow = bron_kerbosch1(&g, |c| {
            found.push(c.to_vec());
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(found, vec![ids(&[0, 1, 2])]);
    }

    #[test]
    fn test_clique_early_stop_from_nested_frame() {
        // K4 on 0..=3 plus the edge 4-5: the K4 is reported four frames deep
        let g = undirected(6, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (4, 5)]);
        let mut found = Vec::new();
        let flow = bron_kerbosch1(&g, |c| {
            found.push(c.to_vec());
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(found, vec![ids(&[0, 1, 2, 3])]);

        for config in all_configs() {
            let mut seen = 0;
            let flow = for_each_maximal_clique(&g, &config, |_| {
                seen += 1;
                ControlFlow::Break(())
            });
            assert_eq!(flow, Ok(ControlFlow::Break(())));
            assert_eq!(seen, 1);
        }
    }

    #[test]
    fn test_clique_closure_pivot() {
        let g = undirected(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
        let mut calls = 0;
        let mut cliques = Vec::new();
        let _ = bron_kerbosch2(
            &g,
            |p: &BitSet, _: &BitSet| {
                calls += 1;
                p.iter().last().map(NodeId::new)
            },
            |c| {
                cliques.push(c.to_vec());
                ControlFlow::Continue(())
            },
        );
        assert!(calls > 0);
        assert_eq!(normalized(cliques), vec![ids(&[0, 1, 2]), ids(&[2, 3])]);
    }

    #[test]
    fn test_clique_no_pivot_strategy() {
        let g = undirected(3, &[(0, 1), (1, 2)]);
        let mut cliques = Vec::new();
        let _ = bron_kerbosch2(
            &g,
            |_: &BitSet, _: &BitSet| None,
            |c| {
                cliques.push(c.to_vec());
                ControlFlow::Continue(())
            },
        );
        assert_eq!(cliques, vec![ids(&[0, 1]), ids(&[1, 2])]);
    }

    #[test]
    fn test_max_degree_pivot() {
        // 2 has the highest degree
        let g = undirected(4, &[(0, 2), (1, 2), (3, 2)]);
        let mut pivot = MaxDegreePivot::new(&g);

        let p = BitSet::from_indices(4, [0, 1]);
        let x = BitSet::from_indices(4, [2]);
        assert_eq!(pivot.choose(&p, &x), Some(n(2)));

        // Ties go to the first node scanned
        let p = BitSet::from_indices(4, [1, 0]);
        assert_eq!(pivot.choose(&p, &BitSet::new(4)), Some(n(0)));
        assert_eq!(MinCandidatePivot.choose(&p, &x), Some(n(0)));
    }

    #[test]
    fn test_clique_large_clique_depth() {
        // K_300 nests 300 levels deep
        let mut edges = Vec::new();
        for a in 0..300 {
            for b in a + 1..300 {
                edges.push((a, b));
            }
        }
        let g = undirected(300, &edges);
        let cliques = maximal_cliques(&g, &CliqueConfig::default()).unwrap();
        assert_eq!(cliques.len(), 1);
        assert_eq!(cliques[0].len(), 300);
    }

    #[test]
    fn test_clique_rejects_non_simple() {
        let config = CliqueConfig::default();

        let looped = undirected(2, &[(0, 1), (1, 1)]);
        assert_eq!(maximal_cliques(&looped, &config), Err(Error::Loop(n(1))));

        let parallel = undirected(2, &[(0, 1), (0, 1)]);
        assert_eq!(
            maximal_cliques(&parallel, &config),
            Err(Error::ParallelEdge {
                from: n(0),
                to: n(1)
            })
        );

        let mut called = false;
        let result = for_each_maximal_clique(&looped, &config, |_| {
            called = true;
            ControlFlow::Continue(())
        });
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_clique_labeled_graph() {
        let mut g = Undirected::<LabeledAdjacencyList>::with_order(3);
        g.add_edge(n(0), n(1), LabelId::new(5));
        g.add_edge(n(1), n(2), LabelId::new(6));
        g.add_edge(n(2), n(0), LabelId::new(7));

        let cliques = maximal_cliques(&g, &CliqueConfig::default()).unwrap();
        assert_eq!(cliques, vec![ids(&[0, 1, 2])]);
    }

    #[test]
    fn test_clique_config_names() {
        assert_eq!(CliqueAlgorithm::default().to_string(), "degeneracy");
        assert_eq!(PivotKind::default().to_string(), "max-degree");
        assert_eq!(
            "min-candidate".parse::<PivotKind>(),
            Ok(PivotKind::MinCandidate)
        );
        let names: Vec<&'static str> = CliqueAlgorithm::iter().map(Into::into).collect();
        assert_eq!(names, vec!["plain", "pivot", "degeneracy"]);
    }
}
