#![allow(dead_code)]

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use twinet::{SentimentColor, TweetRecord};

/// Authored post with a color and no interactions.
pub fn post(id: u64, author: u64, name: &str, color: SentimentColor) -> TweetRecord {
    TweetRecord::new(id, author, name).with_color(color)
}

/// `author` replies to `target`, colored `color`.
pub fn reply(id: u64, author: u64, name: &str, target: u64, target_name: &str, color: SentimentColor) -> TweetRecord {
    TweetRecord::new(id, author, name).reply_to(target, target_name).with_color(color)
}

/// Star around account 1 (`hub`): accounts 2, 3, 4 each reply to it.
/// Every account authors at least one colored post.
pub fn star_corpus() -> Vec<TweetRecord> {
    vec![
        post(100, 1, "hub", SentimentColor::Teal),
        reply(101, 2, "leaf_a", 1, "hub", SentimentColor::Maroon),
        reply(102, 3, "leaf_b", 1, "hub", SentimentColor::LightBlue),
        reply(103, 4, "leaf_c", 1, "hub", SentimentColor::Moccasin),
    ]
}

/// Two disjoint components, sizes 3 (accounts 10..=12) and 5 (accounts 20..=24).
/// The small one is listed first so insertion order cannot pick the answer.
pub fn two_component_corpus() -> Vec<TweetRecord> {
    use SentimentColor::*;
    vec![
        reply(1, 10, "s0", 11, "s1", Teal),
        reply(2, 11, "s1", 12, "s2", Teal),
        post(3, 12, "s2", Teal),
        reply(4, 20, "b0", 21, "b1", Maroon),
        reply(5, 21, "b1", 22, "b2", Maroon),
        reply(6, 22, "b2", 23, "b3", Maroon),
        reply(7, 23, "b3", 24, "b4", Maroon),
        post(8, 24, "b4", Maroon),
    ]
}

/// Write JSON values as NDJSON lines.
pub fn write_ndjson(path: &Path, lines: &[serde_json::Value]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(path).unwrap();
    for l in lines {
        writeln!(&mut f, "{}", l).unwrap();
    }
}

/// Read a text file line-by-line into strings (skips empty lines).
pub fn read_lines(path: &Path) -> Vec<String> {
    let f = File::open(path).unwrap();
    let r = BufReader::new(f);
    r.lines().map(|l| l.unwrap()).filter(|s| !s.is_empty()).collect()
}
