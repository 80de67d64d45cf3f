//! Node pruning: drop nodes (and their edges) matching a predicate.

use crate::graph::{InteractionGraph, NodeAttrs};

/// Remove every node for which `predicate(attrs, degree)` holds. Returns the count removed.
pub fn prune<F>(graph: &mut InteractionGraph, predicate: F) -> usize
where
    F: FnMut(&NodeAttrs, usize) -> bool,
{
    graph.remove_nodes_where(predicate)
}

/// Drop nodes the resolver left without a color.
pub fn prune_unresolved(graph: &mut InteractionGraph) -> usize {
    let n = prune(graph, |attrs, _| attrs.color.is_none());
    tracing::info!(removed = n, remaining = graph.node_count(), "pruned unresolved nodes");
    n
}

/// Drop nodes with no edges.
pub fn prune_isolates(graph: &mut InteractionGraph) -> usize {
    let n = prune(graph, |_, degree| degree == 0);
    tracing::info!(removed = n, remaining = graph.node_count(), "pruned isolated nodes");
    n
}
