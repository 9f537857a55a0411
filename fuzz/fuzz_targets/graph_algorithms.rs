#![no_main]

use std::ops::ControlFlow;

use adjgraph::graph::{
    algorithms::{
        condensation, degeneracy, maximal_cliques, scc_with, try_dominators,
        try_post_dominators, CliqueConfig, SccAlgorithm,
    },
    AdjacencyList, NodeId, Undirected,
};
use libfuzzer_sys::fuzz_target;

// First byte is the order, then (from, to) byte pairs; out-of-range targets are kept
// so the validating entry points see them too.
fuzz_target!(|data: &[u8]| {
    let Some((&order, arcs)) = data.split_first() else {
        return;
    };
    let order = usize::from(order % 64);

    let mut graph = AdjacencyList::with_order(order);
    for pair in arcs.chunks_exact(2) {
        let from = usize::from(pair[0]);
        if from < order {
            graph.add_arc(NodeId::new(from), NodeId::new(usize::from(pair[1]) % 72));
        }
    }

    let start = NodeId::new(usize::from(data.len() as u8) % 72);
    let _ = try_dominators(&graph, start).map(|doms| doms.frontier());
    let _ = try_post_dominators(&graph, start);

    if adjgraph::graph::validate::validate_bounds(&graph).is_err() {
        return;
    }

    let mut sizes = [0usize; 3];
    for (i, algorithm) in [SccAlgorithm::Tarjan, SccAlgorithm::Pearce, SccAlgorithm::PathBased]
        .into_iter()
        .enumerate()
    {
        let _ = scc_with(&graph, algorithm, |c| {
            sizes[i] += c.len();
            ControlFlow::Continue(())
        });
    }
    assert!(sizes.iter().all(|&s| s == order));
    let _ = condensation(&graph);

    let mut edges = Vec::new();
    for from in 0..order {
        for &to in graph.arcs(NodeId::new(from)) {
            if from < to.index() {
                edges.push((from, to.index()));
            }
        }
    }
    edges.sort_unstable();
    edges.dedup();
    let undirected = Undirected::from_edges(order, &edges);
    let _ = degeneracy(&undirected);
    let _ = maximal_cliques(&undirected, &CliqueConfig::default());
});
