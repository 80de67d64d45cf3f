#[path = "common/mod.rs"]
mod common;

use common::*;
use twinet::{
    modal_degree, summarize, CanonicalId, GraphAssembler, GraphSummary, Interpretation, InteractionGraph,
    NetworkAnalysis, SentimentColor,
};

fn graph_of(records: &[twinet::TweetRecord]) -> InteractionGraph {
    let mut asm = GraphAssembler::default();
    asm.ingest_all(records);
    asm.finish().graph
}

/// 4-node star: center degree 3, three leaves of degree 1.
/// Outcome: max 3, mean 1.5, mode 1, one component, connected; the hub is most connected.
#[test]
fn star_graph_statistics() {
    let s = summarize(&graph_of(&star_corpus()));
    assert_eq!(s.nodes, 4);
    assert_eq!(s.edges, 3);
    assert_eq!(s.degrees, vec![3, 1, 1, 1]);
    assert_eq!(s.max_degree, 3);
    assert!((s.mean_degree - 1.5).abs() < 1e-12);
    assert_eq!(s.modal_degree, 1);
    assert_eq!(s.components, 1);
    assert!(s.is_connected);

    let top = s.most_connected.unwrap();
    assert_eq!(top.id, CanonicalId::Num(1));
    assert_eq!(top.name.as_deref(), Some("hub"));
    assert_eq!(top.degree, 3);
}

/// Tied modes report the smallest value.
#[test]
fn modal_degree_tie_break() {
    assert_eq!(modal_degree(&[2, 2, 3, 3]), 2);
    assert_eq!(modal_degree(&[3, 3, 2, 2]), 2);
    assert_eq!(modal_degree(&[5, 1, 5]), 5);
    assert_eq!(modal_degree(&[]), 0);
}

/// Empty graph: all zeros, not connected, no panic.
#[test]
fn empty_graph_statistics() {
    let s = summarize(&InteractionGraph::new());
    assert_eq!(s, GraphSummary::empty());
    assert_eq!(s.nodes, 0);
    assert_eq!(s.mean_degree, 0.0);
    assert!(!s.is_connected);
}

/// One node: degree 0, one component, trivially connected.
#[test]
fn single_node_statistics() {
    let s = summarize(&graph_of(&[post(1, 1, "solo", SentimentColor::Teal)]));
    assert_eq!(s.nodes, 1);
    assert_eq!(s.degrees, vec![0]);
    assert_eq!(s.max_degree, 0);
    assert_eq!(s.mean_degree, 0.0);
    assert_eq!(s.modal_degree, 0);
    assert_eq!(s.components, 1);
    assert!(s.is_connected);
}

/// Disconnected graph counts components and says so.
#[test]
fn disconnected_graph_statistics() {
    let s = summarize(&graph_of(&two_component_corpus()));
    assert_eq!(s.components, 2);
    assert!(!s.is_connected);
    assert_eq!(s.edges, 6);
}

/// The text report always carries the connectivity verdict for the full network and the
/// largest subnetwork section.
#[test]
fn text_report_layout() {
    let out = NetworkAnalysis::new().progress(false).analyze(&two_component_corpus());
    let text = out.report.to_string();

    assert!(text.contains("Nodes = 8\n"));
    assert!(text.contains("Edges = 6\n"));
    assert!(text.contains("# Connected Components = 2\n"));
    assert!(text.contains("Network not connected.\n"));
    assert!(text.contains("\nLargest Subgraph Analysis\n"));
    assert!(text.contains("Network is connected.\n"), "largest component is connected");
    assert!(!text.contains("Run incomplete"));
}

/// Zero records: the report completes with zero counts and a verdict.
#[test]
fn empty_report_still_complete() {
    let out = NetworkAnalysis::new().progress(false).analyze(&[]);
    let text = out.report.to_string();
    assert!(text.contains("Nodes = 0\n"));
    assert!(text.contains("Edges = 0\n"));
    assert!(text.contains("Network not connected.\n"));
    assert_eq!(out.report.largest, GraphSummary::empty());
}

/// Report files land on disk in both formats; the JSON form reads back.
#[test]
fn report_files_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = NetworkAnalysis::new().progress(false).analyze(&star_corpus());

    let txt = dir.path().join("network_analysis.txt");
    let json = dir.path().join("network_analysis.json");
    out.report.write_text(&txt).unwrap();
    out.report.write_json(&json, true).unwrap();

    let lines = read_lines(&txt);
    assert!(lines.iter().any(|l| l == "Max Degree = 3"));
    assert!(lines.iter().any(|l| l == "Average degree = 1.5"));

    let back: twinet::NetworkReport = serde_json::from_reader(std::fs::File::open(&json).unwrap()).unwrap();
    assert_eq!(back.full, out.report.full);
    assert!(back.assembly.complete);
}

/// Score bands and their colors.
#[test]
fn sentiment_bands() {
    assert_eq!(Interpretation::from_score(0.6), Interpretation::StronglyPositive);
    assert_eq!(Interpretation::from_score(0.25), Interpretation::WeaklyPositive);
    assert_eq!(Interpretation::from_score(0.05), Interpretation::Neutral);
    assert_eq!(Interpretation::from_score(-0.05), Interpretation::Neutral);
    assert_eq!(Interpretation::from_score(-0.1), Interpretation::WeaklyNegative);
    assert_eq!(Interpretation::from_score(-0.25), Interpretation::WeaklyNegative);
    assert_eq!(Interpretation::from_score(-0.26), Interpretation::StronglyNegative);
    assert_eq!(SentimentColor::from_score(-0.1), SentimentColor::MistyRose);
    assert_eq!(Interpretation::StronglyNegative.symbol(), "--");
    assert_eq!("LightBlue".parse::<SentimentColor>().unwrap(), SentimentColor::LightBlue);
}
