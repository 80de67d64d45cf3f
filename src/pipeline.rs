use crate::assemble::{Assembly, GraphAssembler};
use crate::components::largest_component;
use crate::config::AnalysisOptions;
use crate::error::RecordError;
use crate::extract::{extract, Interactions};
use crate::graph::InteractionGraph;
use crate::progress::maybe_count_progress;
use crate::prune::{prune_isolates, prune_unresolved};
use crate::record::TweetRecord;
use crate::report::NetworkReport;
use crate::resolve::{resolve, AmbiguityPolicy, RolePriority};
use crate::stats::summarize;
use crate::util::{init_thread_pool, init_tracing_once};

#[derive(Clone, Debug, Default)]
pub struct NetworkAnalysis {
    pub(crate) opts: AnalysisOptions,
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct AnalysisOutput {
    /// Resolved graph with unresolved nodes pruned.
    pub graph: InteractionGraph,
    /// Largest connected component of `graph`.
    pub largest: InteractionGraph,
    /// Resolved graph with isolated nodes pruned (unresolved nodes kept).
    pub connected_view: InteractionGraph,
    pub report: NetworkReport,
}

impl NetworkAnalysis {
    pub fn new() -> Self {
        Self { opts: AnalysisOptions::default() }
    }

    pub fn with_options(opts: AnalysisOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn role_priority(mut self, p: RolePriority) -> Self { self.opts = self.opts.with_role_priority(p); self }
    pub fn ambiguity_policy(mut self, p: AmbiguityPolicy) -> Self { self.opts = self.opts.with_ambiguity(p); self }
    pub fn register_isolated_authors(mut self, yes: bool) -> Self { self.opts = self.opts.with_isolated_authors(yes); self }
    pub fn parallelism(mut self, threads: usize) -> Self { self.opts = self.opts.with_parallelism(threads); self }
    pub fn shard_concurrency(mut self, n: usize) -> Self { self.opts = self.opts.with_shard_concurrency(n); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn merge_env(mut self) -> Self { self.opts = self.opts.merge_env(); self }

    pub fn options(&self) -> &AnalysisOptions {
        &self.opts
    }

    // -------- Operations --------

    /// Build the graph from one ordered record sequence.
    pub fn assemble(&self, records: &[TweetRecord]) -> Assembly {
        init_tracing_once();
        let label = self.opts.progress_label.as_deref().unwrap_or("Assembling graph");
        let pb = maybe_count_progress(self.opts.progress, records.len() as u64, label);

        let mut asm = GraphAssembler::new(self.opts.register_isolated_authors);
        for rec in records {
            asm.ingest(rec);
            if let Some(pb) = &pb { pb.inc(1); }
        }
        if let Some(pb) = pb { pb.finish_with_message("done"); }
        asm.finish()
    }

    /// Build the graph from shards extracted in parallel. Workers only extract; a single
    /// writer merges shard results in shard order, so the graph equals the sequential
    /// build over the concatenated shards.
    pub fn assemble_shards(&self, shards: &[Vec<TweetRecord>]) -> Assembly {
        init_tracing_once();
        init_thread_pool(self.opts.parallelism);

        let label = self.opts.progress_label.as_deref().unwrap_or("Extracting shards");
        let pb = maybe_count_progress(self.opts.progress, shards.len() as u64, label);
        let extracted: Vec<Vec<Result<Interactions, RecordError>>> =
            crate::concurrency::map_shards_limited(shards, self.opts.shard_concurrency, |shard| {
                let part: Vec<_> = shard.iter().map(extract).collect();
                if let Some(pb) = &pb { pb.inc(1); }
                part
            });
        if let Some(pb) = pb { pb.finish_with_message("extracted"); }

        let mut asm = GraphAssembler::new(self.opts.register_isolated_authors);
        for (i, part) in extracted.into_iter().enumerate() {
            tracing::debug!(shard = i, records = part.len(), "merging shard");
            for res in part {
                match res {
                    Ok(it) => asm.ingest_interactions(it),
                    Err(e) => asm.skip(&e),
                }
            }
        }
        asm.finish()
    }

    /// Resolve, prune and summarize an assembly (complete or partial).
    pub fn analyze_assembly(&self, assembly: Assembly) -> AnalysisOutput {
        init_tracing_once();
        let Assembly { mut graph, tables, stats } = assembly;

        let resolution = resolve(&mut graph, &tables, &self.opts.role_priority, self.opts.ambiguity);

        let mut connected_view = graph.clone();
        prune_isolates(&mut connected_view);

        let pruned_unresolved = prune_unresolved(&mut graph);
        let largest = largest_component(&graph);

        let full = summarize(&graph);
        let largest_summary = summarize(&largest);
        tracing::info!(
            nodes = full.nodes,
            edges = full.edges,
            components = full.components,
            largest_nodes = largest_summary.nodes,
            "network summarized"
        );

        let report = NetworkReport::new(stats, resolution, pruned_unresolved, full, largest_summary);
        AnalysisOutput { graph, largest, connected_view, report }
    }

    pub fn analyze(&self, records: &[TweetRecord]) -> AnalysisOutput {
        self.analyze_assembly(self.assemble(records))
    }

    pub fn analyze_shards(&self, shards: &[Vec<TweetRecord>]) -> AnalysisOutput {
        self.analyze_assembly(self.assemble_shards(shards))
    }
}
