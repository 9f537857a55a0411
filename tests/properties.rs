//! Property tests over randomly generated graphs.
//!
//! Each property is checked against a brute-force oracle (reachability by BFS,
//! dominance by node removal, cliques by subset enumeration), so graphs are kept
//! small.

use std::{collections::BTreeSet, ops::ControlFlow};

use adjgraph::{
    graph::{
        algorithms::{
            condensation, degeneracy, dominators, maximal_cliques, scc_with,
            strongly_connected_components, CliqueAlgorithm, CliqueConfig, PivotKind, SccAlgorithm,
        },
        transpose,
        validate::validate_simple,
        AdjacencyList, GraphBase, NodeId, Successors, Undirected,
    },
    utils::BitSet,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

const MAX_ORDER: usize = 10;

fn digraph() -> impl Strategy<Value = AdjacencyList> {
    (1..=MAX_ORDER).prop_flat_map(|order| {
        prop::collection::vec((0..order, 0..order), 0..=order * 3)
            .prop_map(move |arcs| AdjacencyList::from_arcs(order, &arcs))
    })
}

fn simple_graph() -> impl Strategy<Value = Undirected<AdjacencyList>> {
    (1..=MAX_ORDER).prop_flat_map(|order| {
        prop::collection::vec((0..order, 0..order), 0..=order * 2).prop_map(move |pairs| {
            let edges: BTreeSet<(usize, usize)> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect();
            let edges: Vec<(usize, usize)> = edges.into_iter().collect();
            Undirected::from_edges(order, &edges)
        })
    })
}

/// Undirected graphs with parallel edges and loops.
fn multigraph() -> impl Strategy<Value = Undirected<AdjacencyList>> {
    (1..=MAX_ORDER).prop_flat_map(|order| {
        prop::collection::vec((0..order, 0..order), 0..=order * 3)
            .prop_map(move |edges| Undirected::from_edges(order, &edges))
    })
}

/// Nodes reachable from `start` without passing through `removed`.
fn reachable(graph: &AdjacencyList, start: NodeId, removed: Option<NodeId>) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    if Some(start) == removed {
        return seen;
    }
    seen[start.index()] = true;
    let mut queue = vec![start];
    while let Some(node) = queue.pop() {
        for &to in graph.arcs(node) {
            if Some(to) != removed && !seen[to.index()] {
                seen[to.index()] = true;
                queue.push(to);
            }
        }
    }
    seen
}

fn emitted(graph: &AdjacencyList, algorithm: SccAlgorithm) -> Vec<Vec<NodeId>> {
    let mut components = Vec::new();
    let _ = scc_with(graph, algorithm, |c| {
        components.push(c.to_vec());
        ControlFlow::Continue(())
    });
    components
}

fn is_clique(graph: &Undirected<AdjacencyList>, nodes: &[NodeId]) -> bool {
    nodes.iter().enumerate().all(|(i, &a)| {
        nodes[i + 1..]
            .iter()
            .all(|b| graph.inner().arcs(a).contains(b))
    })
}

/// Every maximal clique by subset enumeration.
fn brute_force_cliques(graph: &Undirected<AdjacencyList>) -> BTreeSet<Vec<NodeId>> {
    let order = graph.node_count();
    let cliques: Vec<Vec<NodeId>> = (1u32..1 << order)
        .map(|mask| {
            (0..order)
                .filter(|i| mask & (1 << i) != 0)
                .map(NodeId::new)
                .collect::<Vec<_>>()
        })
        .filter(|nodes| is_clique(graph, nodes))
        .collect();

    cliques
        .iter()
        .filter(|c| {
            !cliques
                .iter()
                .any(|d| d.len() > c.len() && c.iter().all(|n| d.contains(n)))
        })
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn scc_partitions_by_mutual_reachability(graph in digraph()) {
        let order = graph.node_count();
        let reach: Vec<Vec<bool>> = graph
            .node_ids()
            .map(|n| reachable(&graph, n, None))
            .collect();

        for algorithm in SccAlgorithm::iter() {
            let components = emitted(&graph, algorithm);

            let mut component_of = vec![None; order];
            for (i, component) in components.iter().enumerate() {
                for node in component {
                    prop_assert!(component_of[node.index()].is_none());
                    component_of[node.index()] = Some(i);
                }
            }
            prop_assert!(component_of.iter().all(Option::is_some));

            for a in 0..order {
                for b in 0..order {
                    let mutual = reach[a][b] && reach[b][a];
                    prop_assert_eq!(component_of[a] == component_of[b], mutual);
                }
            }
        }
    }

    #[test]
    fn scc_reversed_emission_is_topological(graph in digraph()) {
        for algorithm in SccAlgorithm::iter() {
            let mut components = emitted(&graph, algorithm);
            components.reverse();

            let mut position = vec![0; graph.node_count()];
            for (i, component) in components.iter().enumerate() {
                for node in component {
                    position[node.index()] = i;
                }
            }
            for from in graph.node_ids() {
                for to in graph.successors(from) {
                    prop_assert!(position[from.index()] <= position[to.index()]);
                }
            }
        }
    }

    #[test]
    fn condensation_is_acyclic(graph in digraph()) {
        let cond = condensation(&graph);
        let dag = cond.graph();
        for from in dag.node_ids() {
            for to in dag.successors(from) {
                prop_assert!(from < to);
            }
        }
        prop_assert!(validate_simple(dag).is_ok());
        prop_assert_eq!(strongly_connected_components(dag).len(), dag.node_count());
    }

    #[test]
    fn dominators_match_node_removal(graph in digraph(), start in 0..MAX_ORDER) {
        let start = NodeId::new(start % graph.node_count());
        let doms = dominators(&graph, start);
        let reach = reachable(&graph, start, None);

        prop_assert_eq!(doms.immediate_dominator(start), Some(start));

        for node in graph.node_ids() {
            prop_assert_eq!(doms.is_reachable(node), reach[node.index()]);
            if !reach[node.index()] || node == start {
                continue;
            }

            let idom = doms.immediate_dominator(node).unwrap();
            prop_assert!(doms.strictly_dominates(idom, node));

            let chain: Vec<NodeId> = doms.dominators(node).collect();
            prop_assert!(chain.len() <= graph.node_count());
            prop_assert_eq!(chain.last(), Some(&start));

            // a dominates node iff removing a cuts node off from start
            for a in graph.node_ids() {
                if !reach[a.index()] || a == node {
                    continue;
                }
                let cut = !reachable(&graph, start, Some(a))[node.index()];
                prop_assert_eq!(doms.dominates(a, node), cut);
            }
        }
    }

    #[test]
    fn dominance_frontier_definition(graph in digraph(), start in 0..MAX_ORDER) {
        let start = NodeId::new(start % graph.node_count());
        let doms = dominators(&graph, start);
        let preds = transpose(&graph);
        let frontiers = doms.frontier();

        for a in graph.node_ids() {
            let Some(frontier) = frontiers.get(a) else {
                prop_assert!(!doms.is_reachable(a));
                continue;
            };
            for b in graph.node_ids() {
                // The start node is its own immediate dominator, so the walk
                // never places it in its own frontier
                let expected = doms.is_reachable(b)
                    && !(a == start && b == start)
                    && !doms.strictly_dominates(a, b)
                    && preds.arcs(b).len() >= 2
                    && preds.arcs(b).iter().any(|&p| doms.dominates(a, p));
                prop_assert_eq!(frontier.contains(&b), expected);
            }
        }
    }

    #[test]
    fn clique_variants_agree_with_brute_force(graph in simple_graph()) {
        let expected = brute_force_cliques(&graph);

        for algorithm in CliqueAlgorithm::iter() {
            for pivot in PivotKind::iter() {
                let config = CliqueConfig::default()
                    .with_algorithm(algorithm)
                    .with_pivot(pivot);
                let cliques = maximal_cliques(&graph, &config).unwrap();
                let unique: BTreeSet<Vec<NodeId>> = cliques.iter().cloned().collect();

                prop_assert_eq!(unique.len(), cliques.len());
                prop_assert_eq!(&unique, &expected);
            }
        }
    }

    #[test]
    fn degeneracy_bounds_removal_degree(graph in prop_oneof![simple_graph(), multigraph()]) {
        let d = degeneracy(&graph);
        let mut ordered: Vec<NodeId> = d.ordering().to_vec();
        ordered.sort();
        prop_assert_eq!(ordered, graph.node_ids().collect::<Vec<_>>());

        prop_assert_eq!(d.ordering().len(), graph.node_count());

        let mut removed = BitSet::new(graph.node_count());
        let mut max = 0;
        for &node in d.ordering() {
            let remaining = graph
                .successors(node)
                .filter(|nb| !removed.contains(nb.index()))
                .count();
            max = max.max(remaining);
            removed.insert(node.index());
        }
        prop_assert_eq!(max, d.k());

        // Inside the j-core every node keeps at least j neighbors
        for j in 0..=d.k() {
            let core = BitSet::from_indices(graph.node_count(), d.core(j).iter().map(|n| n.index()));
            for &node in d.core(j) {
                let inside = graph.successors(node).filter(|nb| core.contains(nb.index())).count();
                prop_assert!(inside >= j);
            }
        }
    }
}
