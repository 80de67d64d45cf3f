//! Error taxonomy: record-level defects are recovered by the caller (skip and count),
//! configuration errors surface from option parsing.

use thiserror::Error;

/// A single record that cannot contribute to the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record has no author id")]
    MissingAuthor,
    #[error("record has no tweet id")]
    MissingTweetId,
    #[error("{field}: cannot normalize identifier {raw:?}")]
    InvalidId { field: &'static str, raw: String },
}

/// Invalid analysis configuration (role priority, env overrides).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown role {0:?} (expected author, mention, retweet or reply)")]
    UnknownRole(String),
    #[error("role {0:?} listed more than once")]
    DuplicateRole(String),
    #[error("role priority must name at least one role")]
    EmptyPriority,
    #[error("unknown ambiguity policy {0:?} (expected first or blank)")]
    UnknownPolicy(String),
}
