//! Attribute resolution: give every node one sentiment color.
//!
//! Sentiment exists only for authored posts. A node that never authored anything borrows
//! the color of a post in which it was a target. Role tables are filled in record order,
//! so within a role the first colored record wins; across roles the configured
//! `RolePriority` decides (author, mention, retweet, reply by default).

use crate::error::ConfigError;
use crate::extract::{Interactions, Role};
use crate::graph::InteractionGraph;
use crate::ids::{NodeId, TweetId};
use crate::sentiment::SentimentColor;
use ahash::AHashMap;
use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleEntry {
    pub color: SentimentColor,
    pub first_tweet: TweetId,
    /// A later record in the same role carried a different color.
    pub conflicting: bool,
}

/// Per-role lookup tables from node id to the first colored record seen in that role.
#[derive(Clone, Debug, Default)]
pub struct RoleTables {
    author: AHashMap<NodeId, RoleEntry>,
    mention: AHashMap<NodeId, RoleEntry>,
    retweet: AHashMap<NodeId, RoleEntry>,
    reply: AHashMap<NodeId, RoleEntry>,
    conflicts: u64,
}

impl RoleTables {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, role: Role) -> &AHashMap<NodeId, RoleEntry> {
        match role {
            Role::Author => &self.author,
            Role::Mention => &self.mention,
            Role::Retweet => &self.retweet,
            Role::Reply => &self.reply,
        }
    }

    fn table_mut(&mut self, role: Role) -> &mut AHashMap<NodeId, RoleEntry> {
        match role {
            Role::Author => &mut self.author,
            Role::Mention => &mut self.mention,
            Role::Retweet => &mut self.retweet,
            Role::Reply => &mut self.reply,
        }
    }

    /// Record that `id` appeared in `role` on a post colored `color`.
    pub fn record(&mut self, role: Role, id: &NodeId, color: SentimentColor, tweet_id: &TweetId) {
        let mut conflict = false;
        let table = self.table_mut(role);
        match table.get_mut(id) {
            Some(entry) => {
                if entry.color != color && !entry.conflicting {
                    entry.conflicting = true;
                    conflict = true;
                }
            }
            None => {
                table.insert(id.clone(), RoleEntry { color, first_tweet: tweet_id.clone(), conflicting: false });
            }
        }
        if conflict {
            self.conflicts += 1;
        }
    }

    /// Register every role on one extracted record. Uncolored records register nothing.
    pub fn observe(&mut self, it: &Interactions) {
        let Some(color) = it.color else { return };
        self.record(Role::Author, &it.author.id, color, &it.tweet_id);
        for c in &it.counterparts {
            for &role in &c.roles {
                self.record(role, &c.account.id, color, &it.tweet_id);
            }
        }
    }

    pub fn lookup(&self, role: Role, id: &NodeId) -> Option<&RoleEntry> {
        self.table(role).get(id)
    }

    pub fn len(&self, role: Role) -> usize {
        self.table(role).len()
    }

    /// Number of (role, node) entries that saw disagreeing colors.
    pub fn conflicts(&self) -> u64 {
        self.conflicts
    }
}

/// Order in which role tables are consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RolePriority(Vec<Role>);

impl Default for RolePriority {
    fn default() -> Self {
        Self(vec![Role::Author, Role::Mention, Role::Retweet, Role::Reply])
    }
}

impl RolePriority {
    pub fn new(roles: Vec<Role>) -> Result<Self, ConfigError> {
        if roles.is_empty() {
            return Err(ConfigError::EmptyPriority);
        }
        for (i, r) in roles.iter().enumerate() {
            if roles[..i].contains(r) {
                return Err(ConfigError::DuplicateRole(r.to_string()));
            }
        }
        Ok(Self(roles))
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }
}

impl FromStr for RolePriority {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let roles = s
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<Role>().map_err(ConfigError::UnknownRole))
            .collect::<Result<Vec<_>, _>>()?;
        RolePriority::new(roles)
    }
}

impl fmt::Display for RolePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|r| r.as_str()).collect();
        f.write_str(&names.join(","))
    }
}

/// What to do when the winning role entry saw disagreeing colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbiguityPolicy {
    /// Keep the first color in record order (logged).
    #[default]
    FirstMatch,
    /// Leave the node unresolved.
    Blank,
}

impl FromStr for AmbiguityPolicy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first-match" | "first_match" => Ok(AmbiguityPolicy::FirstMatch),
            "blank" | "unresolved" => Ok(AmbiguityPolicy::Blank),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveStats {
    pub resolved: usize,
    pub unresolved: usize,
    pub ambiguous: usize,
    pub by_role: BTreeMap<Role, usize>,
}

/// Set `color` on every node of `graph` from `tables`. Nodes with no match are cleared.
pub fn resolve(
    graph: &mut InteractionGraph,
    tables: &RoleTables,
    priority: &RolePriority,
    policy: AmbiguityPolicy,
) -> ResolveStats {
    let mut stats = ResolveStats::default();
    let ixs: Vec<NodeIndex> = graph.node_indices().collect();

    for ix in ixs {
        let color = {
            let id = &graph.attrs_at(ix).id;
            let hit = priority
                .roles()
                .iter()
                .find_map(|&role| tables.lookup(role, id).map(|entry| (role, entry)));
            match hit {
                Some((role, entry)) if entry.conflicting => {
                    stats.ambiguous += 1;
                    tracing::warn!(node = %id, %role, first_tweet = %entry.first_tweet, ?policy, "conflicting sentiment colors for node");
                    match policy {
                        AmbiguityPolicy::FirstMatch => Some((role, entry.color)),
                        AmbiguityPolicy::Blank => None,
                    }
                }
                Some((role, entry)) => Some((role, entry.color)),
                None => None,
            }
        };

        match color {
            Some((role, c)) => {
                stats.resolved += 1;
                *stats.by_role.entry(role).or_insert(0) += 1;
                graph.set_color_at(ix, Some(c));
            }
            None => {
                stats.unresolved += 1;
                graph.set_color_at(ix, None);
            }
        }
    }

    tracing::info!(
        resolved = stats.resolved,
        unresolved = stats.unresolved,
        ambiguous = stats.ambiguous,
        priority = %priority,
        "resolved node colors"
    );
    stats
}
