use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use twinet::{read_records, write_adjacency, NetworkAnalysis, TweetRecord};

const STAGED_RECORDS: &str = "./data/usa_tweets.ndjson";
const WORK_ROOT: &str = "./network_work";
const SHARD_RECORDS: usize = 50_000;

fn main() -> Result<()> {
    twinet::init_tracing_once();

    let input = PathBuf::from(STAGED_RECORDS);
    let work_dir = PathBuf::from(WORK_ROOT);
    fs::create_dir_all(&work_dir)?;

    let staged = read_records(&input)?;
    let hw = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(8);

    let mut records = staged.records.into_iter();
    let mut shards: Vec<Vec<TweetRecord>> = Vec::new();
    loop {
        let shard: Vec<TweetRecord> = records.by_ref().take(SHARD_RECORDS).collect();
        if shard.is_empty() { break; }
        shards.push(shard);
    }

    let out = NetworkAnalysis::new()
        .parallelism(hw)
        .shard_concurrency(hw)
        .progress(true)
        .progress_label("Extracting tweet shards")
        .merge_env()
        .analyze_shards(&shards);

    out.report.write_text(&work_dir.join("network_analysis.txt"))?;
    out.report.write_json(&work_dir.join("network_analysis.json"), true)?;
    write_adjacency(&out.graph, &work_dir.join("network.adj.ndjson"))?;
    write_adjacency(&out.largest, &work_dir.join("subnetwork.adj.ndjson"))?;
    write_adjacency(&out.connected_view, &work_dir.join("network-connected.adj.ndjson"))?;

    print!("{}", out.report);
    Ok(())
}
