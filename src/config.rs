use crate::resolve::{AmbiguityPolicy, RolePriority};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    pub role_priority: RolePriority,
    pub ambiguity: AmbiguityPolicy,
    pub register_isolated_authors: bool, // author node even when no interaction survives
    pub parallelism: Option<usize>,      // Some(N) to set rayon threads, None to use default
    pub shard_concurrency: usize,        // limit number of shards extracted concurrently
    pub progress: bool,                  // show progress bar
    pub progress_label: Option<String>,  // optional label for progress bar
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            role_priority: RolePriority::default(),
            ambiguity: AmbiguityPolicy::FirstMatch,
            register_isolated_authors: true,
            parallelism: None,
            shard_concurrency: 4,
            progress: true,
            progress_label: None,
        }
    }
}

impl AnalysisOptions {
    pub fn with_role_priority(mut self, priority: RolePriority) -> Self {
        self.role_priority = priority;
        self
    }
    pub fn with_ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }
    pub fn with_isolated_authors(mut self, yes: bool) -> Self {
        self.register_isolated_authors = yes;
        self
    }
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }
    pub fn with_shard_concurrency(mut self, n: usize) -> Self {
        self.shard_concurrency = n.max(1);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }

    /// Apply environment overrides in place:
    /// - TWINET_ROLE_PRIORITY: comma/semicolon/space separated roles, e.g. "author,mention"
    /// - TWINET_AMBIGUITY: "first" or "blank"
    /// - TWINET_PROGRESS: "0"/"false" disables bars, anything else enables them
    /// Invalid values are logged and ignored.
    pub fn merge_env(mut self) -> Self {
        if let Ok(s) = std::env::var("TWINET_ROLE_PRIORITY") {
            match s.parse::<RolePriority>() {
                Ok(p) => self.role_priority = p,
                Err(e) => tracing::warn!("TWINET_ROLE_PRIORITY ignored: {}", e),
            }
        }
        if let Ok(s) = std::env::var("TWINET_AMBIGUITY") {
            match s.parse::<AmbiguityPolicy>() {
                Ok(p) => self.ambiguity = p,
                Err(e) => tracing::warn!("TWINET_AMBIGUITY ignored: {}", e),
            }
        }
        if let Ok(s) = std::env::var("TWINET_PROGRESS") {
            let s = s.trim().to_lowercase();
            self.progress = !(s == "0" || s == "false" || s == "no");
        }
        self
    }
}
