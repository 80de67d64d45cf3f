//! Flat summary report for the full network and its largest subnetwork.

use crate::assemble::AssemblyStats;
use crate::resolve::ResolveStats;
use crate::stats::GraphSummary;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub generated_at: String,
    pub assembly: AssemblyStats,
    pub resolution: ResolveStats,
    pub pruned_unresolved: usize,
    pub full: GraphSummary,
    pub largest: GraphSummary,
}

impl NetworkReport {
    pub fn new(
        assembly: AssemblyStats,
        resolution: ResolveStats,
        pruned_unresolved: usize,
        full: GraphSummary,
        largest: GraphSummary,
    ) -> Self {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("unknown"));
        Self { generated_at, assembly, resolution, pruned_unresolved, full, largest }
    }

    pub fn write_text(&self, path: &Path) -> Result<()> {
        let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::new(f);
        write!(w, "{self}").with_context(|| format!("write {}", path.display()))?;
        w.flush()?;
        Ok(())
    }

    pub fn write_json(&self, path: &Path, pretty: bool) -> Result<()> {
        let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::new(f);
        if pretty {
            serde_json::to_writer_pretty(&mut w, self)?;
        } else {
            serde_json::to_writer(&mut w, self)?;
        }
        w.flush()?;
        Ok(())
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, s: &GraphSummary) -> fmt::Result {
    writeln!(f, "Nodes = {}", s.nodes)?;
    writeln!(f, "Edges = {}", s.edges)?;
    writeln!(f, "Max Degree = {}", s.max_degree)?;
    writeln!(f, "Average degree = {}", s.mean_degree)?;
    writeln!(f, "Most frequent degree = {}", s.modal_degree)?;
    writeln!(f, "# Connected Components = {}", s.components)?;
    if let Some(top) = &s.most_connected {
        match &top.name {
            Some(name) => writeln!(f, "Most connected = @{} ({}) degree {}", name, top.id, top.degree)?,
            None => writeln!(f, "Most connected = {} degree {}", top.id, top.degree)?,
        }
    }
    if s.is_connected {
        writeln!(f, "Network is connected.")
    } else {
        writeln!(f, "Network not connected.")
    }
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.assembly;
        if !a.complete {
            writeln!(f, "Run incomplete: graph built from a partial record stream.")?;
        }
        writeln!(
            f,
            "Records = {} (accepted {}, skipped {})",
            a.records_seen, a.records_accepted, a.records_skipped
        )?;
        writeln!(
            f,
            "Resolved colors = {} (unresolved {}, ambiguous {}, pruned {})",
            self.resolution.resolved, self.resolution.unresolved, self.resolution.ambiguous, self.pruned_unresolved
        )?;
        writeln!(f)?;
        write_summary(f, &self.full)?;
        writeln!(f)?;
        writeln!(f, "Largest Subgraph Analysis")?;
        write_summary(f, &self.largest)
    }
}
