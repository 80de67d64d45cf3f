//! Concurrency helper: extract shards in parallel, at most `limit` in flight, keeping
//! results in shard order so the single-writer merge is deterministic.

use rayon::prelude::*;

pub fn map_shards_limited<T, R, F>(shards: &[T], limit: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Sync + Fn(&T) -> R,
{
    if limit <= 1 {
        return shards.iter().map(&f).collect();
    }
    let mut out = Vec::with_capacity(shards.len());
    for chunk in shards.chunks(limit) {
        let part: Vec<R> = chunk.par_iter().map(&f).collect();
        out.extend(part);
    }
    out
}
