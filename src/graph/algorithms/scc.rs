//! Strongly Connected Components (SCC) and condensation graphs.
//!
//! A strongly connected component is a maximal set of nodes such that there is a
//! path from every node to every other node in the set. The components of a graph
//! partition its nodes.
//!
//! # Engines
//!
//! Three interchangeable single-pass engines are provided. All of them are
//! iterative, so arbitrarily long paths never exhaust the native call stack:
//!
//! - [`scc_tarjan`] - Tarjan's algorithm with index and lowlink per node
//! - [`scc_pearce`] - Pearce's variant, folding index and lowlink into one rank
//! - [`scc_path_based`] - Gabow's path-based algorithm with two stacks
//!
//! # Emission Order
//!
//! Every engine emits components in **reverse topological order** of the
//! condensation: if an arc leads from component A to component B, then B is emitted
//! before A. [`strongly_connected_components_forward`] reverses that sequence.
//!
//! # Early Termination
//!
//! Each engine hands components to a callback returning [`ControlFlow`]. A
//! `Break(())` stops the traversal immediately. Components emitted so far remain
//! valid; the remaining nodes are left unclassified.

use std::ops::ControlFlow;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::{
    graph::{AdjacencyList, NodeId, Successors},
    utils::BitSet,
};

/// Selects one of the interchangeable SCC engines.
///
/// The names parse from and display as kebab-case strings.
///
/// ```rust
/// use adjgraph::graph::algorithms::SccAlgorithm;
///
/// let algorithm: SccAlgorithm = "path-based".parse().unwrap();
/// assert_eq!(algorithm, SccAlgorithm::PathBased);
/// assert_eq!(SccAlgorithm::default().to_string(), "tarjan");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SccAlgorithm {
    /// [`scc_tarjan`]
    #[default]
    Tarjan,
    /// [`scc_pearce`]
    Pearce,
    /// [`scc_path_based`]
    PathBased,
}

/// Finds strongly connected components with Tarjan's algorithm.
///
/// # Arguments
///
/// * `graph` - The directed graph to analyze
/// * `emit` - Called once per component, in reverse topological order
///
/// # Returns
///
/// `ControlFlow::Break(())` if `emit` stopped the traversal, otherwise
/// `ControlFlow::Continue(())`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Algorithm
///
/// 1. Perform DFS, assigning each node an index in discovery order
/// 2. Compute lowlink values (minimum index reachable via DFS subtree + back edges)
/// 3. When lowlink[v] == index[v], v is root of an SCC; pop stack until v
pub fn scc_tarjan<G, F>(graph: &G, mut emit: F) -> ControlFlow<()>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    let order = graph.node_count();
    let mut index: Vec<Option<usize>> = vec![None; order];
    let mut lowlink = vec![0; order];
    let mut on_stack = BitSet::new(order);
    let mut stack: Vec<NodeId> = Vec::new();
    let mut call = Vec::new();
    let mut next_index = 0;
    let mut components = 0usize;

    for root in graph.node_ids() {
        if index[root.index()].is_some() {
            continue;
        }

        index[root.index()] = Some(next_index);
        lowlink[root.index()] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack.insert(root.index());
        call.push((root, graph.successors(root)));

        loop {
            let (v, next) = match call.last_mut() {
                Some((v, successors)) => (*v, successors.next()),
                None => break,
            };

            if let Some(w) = next {
                match index[w.index()] {
                    None => {
                        // Descend into w
                        index[w.index()] = Some(next_index);
                        lowlink[w.index()] = next_index;
                        next_index += 1;
                        stack.push(w);
                        on_stack.insert(w.index());
                        call.push((w, graph.successors(w)));
                    }
                    Some(w_index) if on_stack.contains(w.index()) => {
                        lowlink[v.index()] = lowlink[v.index()].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors of v are done
            call.pop();
            if let Some((parent, _)) = call.last() {
                lowlink[parent.index()] = lowlink[parent.index()].min(lowlink[v.index()]);
            }

            if index[v.index()] == Some(lowlink[v.index()]) {
                let Some(start) = stack.iter().rposition(|&w| w == v) else {
                    continue;
                };
                for w in &stack[start..] {
                    on_stack.remove(w.index());
                }
                components += 1;
                let flow = emit(&stack[start..]);
                stack.truncate(start);
                if flow.is_break() {
                    debug!(components, "tarjan scc stopped by callback");
                    return ControlFlow::Break(());
                }
            }
        }
    }

    debug!(nodes = order, components, "tarjan scc complete");
    ControlFlow::Continue(())
}

/// Finds strongly connected components with Pearce's single-rank variant of Tarjan.
///
/// Instead of separate index, lowlink and on-stack arrays, each node carries a
/// single rank: zero while unvisited, its (possibly lowered) discovery rank while
/// open, and a component label above every discovery rank once assigned. Only
/// non-root nodes are kept on the stack.
///
/// Emission order and early termination are the same as [`scc_tarjan`].
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn scc_pearce<G, F>(graph: &G, mut emit: F) -> ControlFlow<()>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    let order = graph.node_count();
    let mut rindex = vec![0usize; order];
    let mut stack: Vec<NodeId> = Vec::new();
    let mut component: Vec<NodeId> = Vec::new();
    let mut call = Vec::new();
    // Discovery ranks live in 1..=order, labels above order
    let mut next_index = 1;
    let mut next_label = order + 1;
    let mut components = 0usize;

    for root in graph.node_ids() {
        if rindex[root.index()] != 0 {
            continue;
        }

        rindex[root.index()] = next_index;
        next_index += 1;
        call.push((root, graph.successors(root), true));

        loop {
            let (v, next) = match call.last_mut() {
                Some((v, successors, _)) => (*v, successors.next()),
                None => break,
            };

            if let Some(w) = next {
                if rindex[w.index()] == 0 {
                    rindex[w.index()] = next_index;
                    next_index += 1;
                    call.push((w, graph.successors(w), true));
                } else if rindex[w.index()] < rindex[v.index()] {
                    rindex[v.index()] = rindex[w.index()];
                    if let Some((_, _, is_root)) = call.last_mut() {
                        *is_root = false;
                    }
                }
                continue;
            }

            let Some((_, _, is_root)) = call.pop() else {
                break;
            };

            // Fold the finished child into its parent
            if let Some((parent, _, parent_root)) = call.last_mut() {
                if rindex[v.index()] < rindex[parent.index()] {
                    rindex[parent.index()] = rindex[v.index()];
                    *parent_root = false;
                }
            }

            if !is_root {
                stack.push(v);
                continue;
            }

            component.clear();
            component.push(v);
            while let Some(&w) = stack.last() {
                if rindex[w.index()] < rindex[v.index()] {
                    break;
                }
                stack.pop();
                rindex[w.index()] = next_label;
                component.push(w);
            }
            rindex[v.index()] = next_label;
            next_label += 1;
            components += 1;

            if emit(&component).is_break() {
                debug!(components, "pearce scc stopped by callback");
                return ControlFlow::Break(());
            }
        }
    }

    debug!(nodes = order, components, "pearce scc complete");
    ControlFlow::Continue(())
}

/// Finds strongly connected components with Gabow's path-based algorithm.
///
/// The algorithm keeps the current DFS path on one stack and the boundaries of the
/// tentative components along that path on a second. Reaching a node still on the
/// path merges every component above it into one by popping boundaries.
///
/// Emission order and early termination are the same as [`scc_tarjan`].
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn scc_path_based<G, F>(graph: &G, mut emit: F) -> ControlFlow<()>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    const UNVISITED: usize = usize::MAX;

    let order = graph.node_count();
    // Stack position while open, a label of at least `order` once assigned
    let mut position = vec![UNVISITED; order];
    let mut path: Vec<NodeId> = Vec::new();
    let mut bounds: Vec<usize> = Vec::new();
    let mut call = Vec::new();
    let mut next_label = order;
    let mut components = 0usize;

    for root in graph.node_ids() {
        if position[root.index()] != UNVISITED {
            continue;
        }

        position[root.index()] = path.len();
        bounds.push(path.len());
        path.push(root);
        call.push((root, graph.successors(root)));

        loop {
            let (v, next) = match call.last_mut() {
                Some((v, successors)) => (*v, successors.next()),
                None => break,
            };

            if let Some(w) = next {
                let w_position = position[w.index()];
                if w_position == UNVISITED {
                    position[w.index()] = path.len();
                    bounds.push(path.len());
                    path.push(w);
                    call.push((w, graph.successors(w)));
                } else {
                    while bounds.last().is_some_and(|&b| w_position < b) {
                        bounds.pop();
                    }
                }
                continue;
            }

            call.pop();
            let v_position = position[v.index()];
            if bounds.last() != Some(&v_position) {
                continue;
            }

            bounds.pop();
            for w in &path[v_position..] {
                position[w.index()] = next_label;
            }
            next_label += 1;
            components += 1;
            let flow = emit(&path[v_position..]);
            path.truncate(v_position);
            if flow.is_break() {
                debug!(components, "path-based scc stopped by callback");
                return ControlFlow::Break(());
            }
        }
    }

    debug!(nodes = order, components, "path-based scc complete");
    ControlFlow::Continue(())
}

/// Runs the SCC engine selected by `algorithm`.
pub fn scc_with<G, F>(graph: &G, algorithm: SccAlgorithm, emit: F) -> ControlFlow<()>
where
    G: Successors,
    F: FnMut(&[NodeId]) -> ControlFlow<()>,
{
    match algorithm {
        SccAlgorithm::Tarjan => scc_tarjan(graph, emit),
        SccAlgorithm::Pearce => scc_pearce(graph, emit),
        SccAlgorithm::PathBased => scc_path_based(graph, emit),
    }
}

/// Computes the strongly connected components of a directed graph.
///
/// # Returns
///
/// A vector of SCCs, where each SCC is a vector of `NodeId`s. The SCCs are
/// returned in **reverse topological order** (i.e., if there's an edge from
/// SCC A to SCC B, then A appears after B in the result). Node order within a
/// component is unspecified.
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::strongly_connected_components, AdjacencyList};
///
/// // 0 -> 1 -> 2 -> 0, 2 -> 3
/// let g = AdjacencyList::from_arcs(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
///
/// let sccs = strongly_connected_components(&g);
/// assert_eq!(sccs.len(), 2);
/// assert_eq!(sccs[0].len(), 1); // {3} has no way out, so it comes first
/// assert_eq!(sccs[1].len(), 3);
/// ```
pub fn strongly_connected_components<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let mut sccs = Vec::new();
    let _ = scc_tarjan(graph, |component| {
        sccs.push(component.to_vec());
        ControlFlow::Continue(())
    });
    sccs
}

/// Computes the strongly connected components in forward topological order.
///
/// This is [`strongly_connected_components`] reversed: every arc between two
/// components leads from an earlier to a later component.
pub fn strongly_connected_components_forward<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let mut sccs = strongly_connected_components(graph);
    sccs.reverse();
    sccs
}

/// The condensation of a directed graph: each SCC contracted to a single node.
///
/// Components are numbered in forward topological order, so every arc `i -> j` of
/// the condensation graph satisfies `i < j`. The condensation graph is therefore
/// acyclic, and it carries no self-arcs and no parallel arcs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condensation {
    components: Vec<Vec<NodeId>>,
    component_of: Vec<usize>,
    graph: AdjacencyList,
}

impl Condensation {
    /// Returns the components in forward topological order.
    #[must_use]
    pub fn components(&self) -> &[Vec<NodeId>] {
        &self.components
    }

    /// Returns the index of the component containing `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of the original graph.
    #[must_use]
    pub fn component_of(&self, node: NodeId) -> usize {
        self.component_of[node.index()]
    }

    /// Returns the condensation graph, one node per component.
    #[must_use]
    pub fn graph(&self) -> &AdjacencyList {
        &self.graph
    }

    /// Splits the condensation into components, node-to-component map and graph.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Vec<NodeId>>, Vec<usize>, AdjacencyList) {
        (self.components, self.component_of, self.graph)
    }
}

/// Computes the condensation of a directed graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use adjgraph::graph::{algorithms::condensation, AdjacencyList, NodeId};
///
/// // 0 -> 1 -> 2 -> 1
/// let g = AdjacencyList::from_arcs(3, &[(0, 1), (1, 2), (2, 1)]);
///
/// let cond = condensation(&g);
/// assert_eq!(cond.components().len(), 2);
/// assert_eq!(cond.component_of(NodeId::new(0)), 0);
/// assert_eq!(cond.component_of(NodeId::new(2)), 1);
/// assert_eq!(cond.graph().arcs(NodeId::new(0)), &[NodeId::new(1)]);
/// ```
pub fn condensation<G: Successors>(graph: &G) -> Condensation {
    let components = strongly_connected_components_forward(graph);

    let mut component_of = vec![0; graph.node_count()];
    for (i, component) in components.iter().enumerate() {
        for node in component {
            component_of[node.index()] = i;
        }
    }

    let mut result = AdjacencyList::with_order(components.len());
    let mut seen = BitSet::new(components.len());
    for (i, component) in components.iter().enumerate() {
        let from = NodeId::new(i);
        for &node in component {
            for to in graph.successors(node) {
                let j = component_of[to.index()];
                if j != i && !seen.contains(j) {
                    seen.insert(j);
                    result.add_arc(from, NodeId::new(j));
                }
            }
        }
        for to in result.arcs(from) {
            seen.remove(to.index());
        }
    }

    debug!(
        components = components.len(),
        arcs = result.arc_count(),
        "condensation built"
    );

    Condensation {
        components,
        component_of,
        graph: result,
    }
}
