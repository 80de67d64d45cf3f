//! Simple undirected interaction graph keyed by canonical account id.
//!
//! Backed by a `StableUnGraph` so node indices survive removals. The graph reuses freed
//! slots, so insertion order is tracked separately in `order`; component extraction and
//! degree sequences iterate that list.

use crate::ids::{NodeId, TweetId};
use crate::sentiment::SentimentColor;
use ahash::AHashMap;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttrs {
    pub id: NodeId,
    pub name: Option<String>,
    pub color: Option<SentimentColor>,
}

/// Edge metadata. `source_tweet_id` is best-effort provenance (the last record that
/// produced the pair wins); `weight` counts how many records produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    pub source_tweet_id: TweetId,
    pub weight: u32,
}

/// Outcome of `InteractionGraph::add_edge`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeInsert {
    Added,
    Repeated,
    SelfLoop,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionGraph {
    g: StableUnGraph<NodeAttrs, EdgeAttrs>,
    index: AHashMap<NodeId, NodeIndex>,
    // live nodes, oldest first
    order: Vec<NodeIndex>,
    rank: AHashMap<NodeIndex, u64>,
    next_rank: u64,
}

impl InteractionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize { self.g.node_count() }
    pub fn edge_count(&self) -> usize { self.g.edge_count() }
    pub fn is_empty(&self) -> bool { self.g.node_count() == 0 }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeAttrs> {
        self.index.get(id).map(|&ix| &self.g[ix])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeAttrs> + '_ {
        self.order.iter().map(move |&ix| &self.g[ix])
    }

    /// Edges as `(a, b, attrs)`, in storage order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, &EdgeAttrs)> + '_ {
        self.g
            .edge_references()
            .map(move |e| (&self.g[e.source()].id, &self.g[e.target()].id, e.weight()))
    }

    pub fn degree(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).map(|&ix| self.degree_at(ix))
    }

    /// Neighbors of `id` in node insertion order; empty when `id` is absent.
    pub fn neighbors(&self, id: &NodeId) -> Vec<&NodeId> {
        let Some(&ix) = self.index.get(id) else { return Vec::new() };
        let mut adj: Vec<NodeIndex> = self.g.neighbors(ix).collect();
        adj.sort_unstable_by_key(|n| self.rank_of(*n));
        adj.dedup();
        adj.into_iter().map(|n| &self.g[n].id).collect()
    }

    pub fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<&EdgeAttrs> {
        let (&ia, &ib) = (self.index.get(a)?, self.index.get(b)?);
        self.g.find_edge(ia, ib).map(|e| &self.g[e])
    }

    /// Insert `id` if absent. A present `name` overwrites the stored one; `None` never
    /// erases a known name.
    pub fn upsert_node(&mut self, id: &NodeId, name: Option<&str>) -> NodeIndex {
        let ix = match self.index.get(id) {
            Some(&ix) => ix,
            None => {
                self.insert_node(NodeAttrs { id: id.clone(), name: None, color: None })
            }
        };
        if let Some(name) = name {
            self.g[ix].name = Some(name.to_string());
        }
        ix
    }

    /// Add (or refresh) the undirected edge `a - b`. Missing endpoints are created without
    /// a name. A repeated pair overwrites `source_tweet_id` and bumps `weight`.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId, tweet_id: &TweetId) -> EdgeInsert {
        debug_assert!(a != b, "self-loop on {a} reached the graph");
        if a == b {
            return EdgeInsert::SelfLoop;
        }
        let ia = self.upsert_node(a, None);
        let ib = self.upsert_node(b, None);
        match self.g.find_edge(ia, ib) {
            Some(e) => {
                let attrs = &mut self.g[e];
                attrs.source_tweet_id = tweet_id.clone();
                attrs.weight = attrs.weight.saturating_add(1);
                EdgeInsert::Repeated
            }
            None => {
                self.g.add_edge(ia, ib, EdgeAttrs { source_tweet_id: tweet_id.clone(), weight: 1 });
                EdgeInsert::Added
            }
        }
    }

    pub fn set_color(&mut self, id: &NodeId, color: Option<SentimentColor>) -> bool {
        match self.index.get(id) {
            Some(&ix) => {
                self.g[ix].color = color;
                true
            }
            None => false,
        }
    }

    /// Remove every node for which `pred(attrs, degree)` holds, with its incident edges.
    /// Returns the number of nodes removed.
    pub fn remove_nodes_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&NodeAttrs, usize) -> bool,
    {
        let doomed: Vec<NodeIndex> = self
            .order
            .iter()
            .copied()
            .filter(|&ix| pred(&self.g[ix], self.degree_at(ix)))
            .collect();
        for &ix in &doomed {
            if let Some(attrs) = self.g.remove_node(ix) {
                self.index.remove(&attrs.id);
            }
            self.rank.remove(&ix);
        }
        if !doomed.is_empty() {
            let rank = &self.rank;
            self.order.retain(|ix| rank.contains_key(ix));
        }
        doomed.len()
    }

    /// Induced subgraph on `members`. Nodes keep this graph's insertion order.
    pub fn induced_subgraph(&self, members: &[NodeIndex]) -> InteractionGraph {
        let mut keep: Vec<NodeIndex> = members.to_vec();
        keep.sort_unstable_by_key(|&ix| self.rank_of(ix));
        keep.dedup();

        let mut out = InteractionGraph::new();
        let mut remap: AHashMap<NodeIndex, NodeIndex> = AHashMap::with_capacity(keep.len());
        for ix in keep {
            let Some(attrs) = self.g.node_weight(ix) else { continue };
            let new_ix = out.insert_node(attrs.clone());
            remap.insert(ix, new_ix);
        }
        for e in self.g.edge_references() {
            if let (Some(&a), Some(&b)) = (remap.get(&e.source()), remap.get(&e.target())) {
                out.g.add_edge(a, b, e.weight().clone());
            }
        }
        out
    }

    pub(crate) fn degree_at(&self, ix: NodeIndex) -> usize {
        self.g.edges(ix).count()
    }

    fn insert_node(&mut self, attrs: NodeAttrs) -> NodeIndex {
        let id = attrs.id.clone();
        let ix = self.g.add_node(attrs);
        self.index.insert(id, ix);
        self.order.push(ix);
        self.rank.insert(ix, self.next_rank);
        self.next_rank += 1;
        ix
    }

    fn rank_of(&self, ix: NodeIndex) -> u64 {
        self.rank.get(&ix).copied().unwrap_or(u64::MAX)
    }

    /// Live node indices in insertion order.
    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.order.iter().copied()
    }

    pub(crate) fn attrs_at(&self, ix: NodeIndex) -> &NodeAttrs {
        &self.g[ix]
    }

    pub(crate) fn set_color_at(&mut self, ix: NodeIndex, color: Option<SentimentColor>) {
        if let Some(attrs) = self.g.node_weight_mut(ix) {
            attrs.color = color;
        }
    }

    pub(crate) fn inner(&self) -> &StableUnGraph<NodeAttrs, EdgeAttrs> {
        &self.g
    }
}
