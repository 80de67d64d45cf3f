//! Interaction extraction: turn one record into the author identity plus the accounts it
//! interacted with (reply, retweet, first mention).

use crate::error::RecordError;
use crate::ids::{normalize_name, normalize_opt, NodeId, RawId, TweetId};
use crate::record::TweetRecord;
use crate::sentiment::SentimentColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The part an account plays on a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Mention,
    Retweet,
    Reply,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Author, Role::Mention, Role::Retweet, Role::Reply];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Mention => "mention",
            Role::Retweet => "retweet",
            Role::Reply => "reply",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: NodeId,
    pub name: Option<String>,
}

/// An interaction target on one record. `roles` lists every relation in which the id
/// appeared, in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counterpart {
    pub account: Account,
    pub roles: Vec<Role>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Interactions {
    pub tweet_id: TweetId,
    pub author: Account,
    pub color: Option<SentimentColor>,
    pub counterparts: Vec<Counterpart>,
}

impl Interactions {
    /// `(author, counterpart)` pairs, one per surviving counterpart.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.counterparts.iter().map(move |c| (&self.author.id, &c.account.id))
    }
}

/// Extract the author and interaction targets from one record.
///
/// Relations are scanned reply, retweet, mention. A target equal to the author is dropped,
/// as is a target whose id is missing (with or without a name). Repeated ids merge into
/// one counterpart.
pub fn extract(rec: &TweetRecord) -> Result<Interactions, RecordError> {
    let author_id = normalize_opt(rec.author_id.as_ref(), "author_id")?.ok_or(RecordError::MissingAuthor)?;
    let tweet_id = normalize_opt(rec.id.as_ref(), "id")?.ok_or(RecordError::MissingTweetId)?;

    let relations: [(Role, Option<&RawId>, Option<&str>, &'static str); 3] = [
        (Role::Reply, rec.in_reply_to_user_id.as_ref(), rec.in_reply_to_screen_name.as_deref(), "in_reply_to_user_id"),
        (Role::Retweet, rec.retweeted_id.as_ref(), rec.retweeted_screen_name.as_deref(), "retweeted_id"),
        (Role::Mention, rec.mention_id.as_ref(), rec.mention_screen_name.as_deref(), "mention_id"),
    ];

    let mut counterparts: Vec<Counterpart> = Vec::with_capacity(3);
    for (role, raw_id, raw_name, field) in relations {
        let name = normalize_name(raw_name);
        let id = match normalize_opt(raw_id, field)? {
            Some(id) => id,
            None => {
                if let Some(name) = name {
                    tracing::debug!(%tweet_id, %role, name = %name, "dropping interaction target without id");
                }
                continue;
            }
        };
        if id == author_id {
            continue;
        }
        match counterparts.iter_mut().find(|c| c.account.id == id) {
            Some(existing) => {
                existing.roles.push(role);
                if existing.account.name.is_none() {
                    existing.account.name = name;
                }
            }
            None => counterparts.push(Counterpart { account: Account { id, name }, roles: vec![role] }),
        }
    }

    Ok(Interactions {
        tweet_id,
        author: Account { id: author_id, name: normalize_name(rec.author_name.as_deref()) },
        color: rec.color(),
        counterparts,
    })
}
