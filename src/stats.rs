//! Degree and connectivity statistics for one graph.

use crate::components::count_components;
use crate::graph::InteractionGraph;
use crate::ids::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The highest-degree node (first in insertion order on ties).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub degree: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    /// Per-node degrees in node insertion order.
    pub degrees: Vec<usize>,
    pub max_degree: usize,
    pub mean_degree: f64,
    /// Most frequent degree; the smallest such value on ties.
    pub modal_degree: usize,
    pub components: usize,
    pub is_connected: bool,
    pub most_connected: Option<TopNode>,
}

impl GraphSummary {
    /// Summary of a graph with no nodes: every count zero, not connected.
    pub fn empty() -> Self {
        Self {
            nodes: 0,
            edges: 0,
            degrees: Vec::new(),
            max_degree: 0,
            mean_degree: 0.0,
            modal_degree: 0,
            components: 0,
            is_connected: false,
            most_connected: None,
        }
    }
}

/// Smallest most-frequent value; 0 for an empty slice.
pub fn modal_degree(degrees: &[usize]) -> usize {
    let mut freq: BTreeMap<usize, usize> = BTreeMap::new();
    for &d in degrees {
        *freq.entry(d).or_insert(0) += 1;
    }
    // BTreeMap iterates ascending, so a strict `>` keeps the smallest tied value.
    let mut best: Option<(usize, usize)> = None;
    for (deg, count) in freq {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((deg, count));
        }
    }
    best.map(|(deg, _)| deg).unwrap_or(0)
}

pub fn mean_degree(degrees: &[usize]) -> f64 {
    if degrees.is_empty() {
        return 0.0;
    }
    degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
}

pub fn summarize(graph: &InteractionGraph) -> GraphSummary {
    if graph.is_empty() {
        return GraphSummary::empty();
    }

    let mut degrees = Vec::with_capacity(graph.node_count());
    let mut top: Option<TopNode> = None;
    for ix in graph.node_indices() {
        let d = graph.degree_at(ix);
        degrees.push(d);
        if top.as_ref().map_or(true, |t| d > t.degree) {
            let attrs = graph.attrs_at(ix);
            top = Some(TopNode { id: attrs.id.clone(), name: attrs.name.clone(), degree: d });
        }
    }

    let components = count_components(graph);
    GraphSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        max_degree: degrees.iter().copied().max().unwrap_or(0),
        mean_degree: mean_degree(&degrees),
        modal_degree: modal_degree(&degrees),
        components,
        is_connected: components == 1,
        most_connected: top,
        degrees,
    }
}
