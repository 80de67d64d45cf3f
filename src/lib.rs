mod config;
mod error;
mod ids;
mod sentiment;
mod record;

mod extract;
mod graph;
mod assemble;
mod resolve;
mod prune;
mod components;
mod stats;

mod report;
mod ndjson;
mod progress;
mod concurrency;
mod util;
mod pipeline;

pub use crate::config::AnalysisOptions;
pub use crate::error::{ConfigError, RecordError};
pub use crate::ids::{normalize_id, normalize_name, CanonicalId, NodeId, RawId, TweetId};
pub use crate::sentiment::{Interpretation, SentimentColor};
pub use crate::record::TweetRecord;

pub use crate::extract::{extract, Account, Counterpart, Interactions, Role};
pub use crate::graph::{EdgeAttrs, EdgeInsert, InteractionGraph, NodeAttrs};
pub use crate::assemble::{Assembly, AssemblyStats, GraphAssembler};
pub use crate::resolve::{resolve, AmbiguityPolicy, ResolveStats, RoleEntry, RolePriority, RoleTables};
pub use crate::prune::{prune, prune_isolates, prune_unresolved};
pub use crate::components::{connected_components, count_components, largest_component};
pub use crate::stats::{mean_degree, modal_degree, summarize, GraphSummary, TopNode};

pub use crate::report::NetworkReport;
pub use crate::pipeline::{AnalysisOutput, NetworkAnalysis};

// export NDJSON helpers for staging tools
pub use crate::ndjson::{read_records, write_adjacency, write_adjacency_to, NdjsonReader, StagedRecords};

// Expose multiprogress so binaries can stack bars.
pub use crate::progress::set_global_multiprogress;

pub use crate::util::init_tracing_once;
