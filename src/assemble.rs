//! Single-writer graph assembly over extracted records.

use crate::error::RecordError;
use crate::extract::{extract, Interactions};
use crate::graph::{EdgeInsert, InteractionGraph};
use crate::record::TweetRecord;
use crate::resolve::RoleTables;
use serde::{Deserialize, Serialize};

/// Counters for one assembly run. `complete` is set only by `GraphAssembler::finish`, so a
/// graph taken out early is always reported as partial.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    pub records_seen: u64,
    pub records_accepted: u64,
    pub records_skipped: u64,
    pub missing_author: u64,
    pub invalid_ids: u64,
    pub edges_added: u64,
    pub edges_repeated: u64,
    pub complete: bool,
}

/// Result of an assembly: the graph plus the role tables the resolver needs.
#[derive(Clone, Debug)]
pub struct Assembly {
    pub graph: InteractionGraph,
    pub tables: RoleTables,
    pub stats: AssemblyStats,
}

pub struct GraphAssembler {
    graph: InteractionGraph,
    tables: RoleTables,
    stats: AssemblyStats,
    register_isolated_authors: bool,
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GraphAssembler {
    /// `register_isolated_authors`: add the author node even when none of its
    /// interactions survive extraction.
    pub fn new(register_isolated_authors: bool) -> Self {
        Self {
            graph: InteractionGraph::new(),
            tables: RoleTables::new(),
            stats: AssemblyStats::default(),
            register_isolated_authors,
        }
    }

    /// Extract and add one record. Defective records are counted and skipped; returns
    /// whether the record was accepted.
    pub fn ingest(&mut self, rec: &TweetRecord) -> bool {
        match extract(rec) {
            Ok(it) => {
                self.ingest_interactions(it);
                true
            }
            Err(e) => {
                self.skip(&e);
                false
            }
        }
    }

    pub fn ingest_all<'a, I>(&mut self, records: I) -> u64
    where
        I: IntoIterator<Item = &'a TweetRecord>,
    {
        let mut accepted = 0u64;
        for rec in records {
            if self.ingest(rec) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Merge an already-extracted record (used by the sharded path).
    pub fn ingest_interactions(&mut self, it: Interactions) {
        self.stats.records_seen += 1;
        self.stats.records_accepted += 1;
        self.tables.observe(&it);

        if self.register_isolated_authors || !it.counterparts.is_empty() {
            self.graph.upsert_node(&it.author.id, it.author.name.as_deref());
        }
        for c in &it.counterparts {
            self.graph.upsert_node(&c.account.id, c.account.name.as_deref());
            match self.graph.add_edge(&it.author.id, &c.account.id, &it.tweet_id) {
                EdgeInsert::Added => self.stats.edges_added += 1,
                EdgeInsert::Repeated => self.stats.edges_repeated += 1,
                EdgeInsert::SelfLoop => {}
            }
        }
    }

    /// Count a record that failed extraction.
    pub fn skip(&mut self, err: &RecordError) {
        self.stats.records_seen += 1;
        self.stats.records_skipped += 1;
        match err {
            RecordError::MissingAuthor => self.stats.missing_author += 1,
            RecordError::InvalidId { .. } => self.stats.invalid_ids += 1,
            RecordError::MissingTweetId => {}
        }
        tracing::debug!(error = %err, "skipping record");
    }

    pub fn stats(&self) -> &AssemblyStats {
        &self.stats
    }

    pub fn graph(&self) -> &InteractionGraph {
        &self.graph
    }

    /// All input was consumed.
    pub fn finish(mut self) -> Assembly {
        self.stats.complete = true;
        tracing::info!(
            seen = self.stats.records_seen,
            skipped = self.stats.records_skipped,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "assembly complete"
        );
        self.into_assembly()
    }

    /// Stop early; the assembly is marked incomplete.
    pub fn into_partial(self) -> Assembly {
        tracing::warn!(seen = self.stats.records_seen, "assembly stopped before end of input");
        self.into_assembly()
    }

    fn into_assembly(self) -> Assembly {
        Assembly { graph: self.graph, tables: self.tables, stats: self.stats }
    }
}
