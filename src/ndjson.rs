use crate::graph::InteractionGraph;
use crate::record::TweetRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Minimal NDJSON reader with buffering and empty-line trimming.
pub struct NdjsonReader<R: BufRead> {
    rdr: R,
}

impl NdjsonReader<BufReader<File>> {
    pub fn open(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = File::open(path)?;
        Ok(Self { rdr: BufReader::with_capacity(buf_bytes.max(8 * 1024), f) })
    }
}

impl<R: BufRead> NdjsonReader<R> {
    pub fn new(rdr: R) -> Self {
        Self { rdr }
    }

    /// Read the next line into `buf`. Returns the number of bytes read (0 on EOF).
    /// Strips trailing `\r?\n`.
    pub fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n == 0 { return Ok(0); }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') { buf.pop(); }
        }
        Ok(n)
    }
}

/// Records read from a staged file plus the count of lines that failed to parse.
#[derive(Debug, Default)]
pub struct StagedRecords {
    pub records: Vec<TweetRecord>,
    pub malformed_lines: u64,
}

/// Read staged `TweetRecord` lines. Blank lines are skipped; lines that do not parse are
/// logged and counted, never fatal.
pub fn read_records(path: &Path) -> Result<StagedRecords> {
    let mut rdr = NdjsonReader::open(path, 256 * 1024).with_context(|| format!("open {}", path.display()))?;
    let mut out = StagedRecords::default();
    let mut buf = String::with_capacity(4 * 1024);
    let mut line_no = 0u64;
    loop {
        let n = rdr.read_line(&mut buf).with_context(|| format!("read {}", path.display()))?;
        if n == 0 { break; }
        line_no += 1;
        if buf.trim().is_empty() { continue; }
        match serde_json::from_str::<TweetRecord>(&buf) {
            Ok(rec) => out.records.push(rec),
            Err(e) => {
                out.malformed_lines += 1;
                tracing::warn!(path = %path.display(), line = line_no, error = %e, "skipping malformed record line");
            }
        }
    }
    tracing::info!(path = %path.display(), records = out.records.len(), malformed = out.malformed_lines, "read staged records");
    Ok(out)
}

#[derive(Serialize)]
struct AdjacencyLine<'a> {
    id: &'a crate::ids::NodeId,
    name: Option<&'a str>,
    color: Option<crate::sentiment::SentimentColor>,
    neighbors: Vec<&'a crate::ids::NodeId>,
}

/// One JSON line per node (`id`, `name`, `color`, `neighbors`), nodes in insertion order.
pub fn write_adjacency(graph: &InteractionGraph, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    write_adjacency_to(graph, &mut w)?;
    w.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

pub fn write_adjacency_to<W: Write>(graph: &InteractionGraph, w: &mut W) -> Result<()> {
    for node in graph.nodes() {
        let line = AdjacencyLine {
            id: &node.id,
            name: node.name.as_deref(),
            color: node.color,
            neighbors: graph.neighbors(&node.id),
        };
        serde_json::to_writer(&mut *w, &line)?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
