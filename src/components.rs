//! Connected components and largest-component extraction.

use crate::graph::InteractionGraph;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{Dfs, VisitMap};

/// Connected components, seeded in node insertion order. Members are listed in
/// traversal order from the seed.
pub fn connected_components(graph: &InteractionGraph) -> Vec<Vec<NodeIndex>> {
    let g = graph.inner();
    let mut out = Vec::new();
    let mut dfs = Dfs::empty(g);
    for seed in graph.node_indices() {
        if dfs.discovered.is_visited(&seed) {
            continue;
        }
        dfs.move_to(seed);
        let mut members = Vec::new();
        while let Some(ix) = dfs.next(g) {
            members.push(ix);
        }
        out.push(members);
    }
    out
}

pub fn count_components(graph: &InteractionGraph) -> usize {
    connected_components(graph).len()
}

/// Induced subgraph on the component with the most nodes. On ties the component whose
/// seed comes first in insertion order wins. Empty graph in, empty graph out.
pub fn largest_component(graph: &InteractionGraph) -> InteractionGraph {
    let mut best: Option<Vec<NodeIndex>> = None;
    for comp in connected_components(graph) {
        if best.as_ref().map_or(true, |b| comp.len() > b.len()) {
            best = Some(comp);
        }
    }
    match best {
        Some(members) => graph.induced_subgraph(&members),
        None => InteractionGraph::new(),
    }
}
