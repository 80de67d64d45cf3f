#[path = "common/mod.rs"]
mod common;

use common::*;
use twinet::{
    resolve, AmbiguityPolicy, CanonicalId, ConfigError, GraphAssembler, Role, RolePriority, SentimentColor, TweetRecord,
};

fn color_of(g: &twinet::InteractionGraph, id: u64) -> Option<SentimentColor> {
    g.node(&CanonicalId::Num(id)).and_then(|n| n.color)
}

fn build(records: &[TweetRecord]) -> twinet::Assembly {
    let mut asm = GraphAssembler::default();
    asm.ingest_all(records);
    asm.finish()
}

/// Account 2 authors its own post (maroon) and is also replied to in a teal post.
/// Outcome: direct authorship wins over the borrowed reply color.
#[test]
fn authorship_beats_borrowed_colors() {
    let records = vec![
        reply(1, 1, "a", 2, "b", SentimentColor::Teal),
        post(2, 2, "b", SentimentColor::Maroon),
    ];
    let mut out = build(&records);
    let stats = resolve(&mut out.graph, &out.tables, &RolePriority::default(), AmbiguityPolicy::FirstMatch);

    assert_eq!(color_of(&out.graph, 2), Some(SentimentColor::Maroon));
    assert_eq!(color_of(&out.graph, 1), Some(SentimentColor::Teal));
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.by_role.get(&Role::Author), Some(&2));
    assert_eq!(out.tables.len(Role::Author), 2);
    assert_eq!(out.tables.len(Role::Reply), 1);
    assert_eq!(out.tables.len(Role::Mention), 0);
}

/// Account 9 never authors; it is replied to (maroon), retweeted (lightblue) and mentioned
/// (moccasin) by different posts. Default priority author → mention → retweet → reply.
/// Outcome: the mention color is borrowed.
#[test]
fn default_priority_prefers_mention_then_retweet_then_reply() {
    let records = vec![
        reply(1, 1, "a", 9, "target", SentimentColor::Maroon),
        TweetRecord::new(2u64, 2u64, "b").retweet_of(9u64, "target").with_color(SentimentColor::LightBlue),
        TweetRecord::new(3u64, 3u64, "c").mentioning(9u64, "target").with_color(SentimentColor::Moccasin),
    ];
    let mut out = build(&records);
    resolve(&mut out.graph, &out.tables, &RolePriority::default(), AmbiguityPolicy::FirstMatch);
    assert_eq!(color_of(&out.graph, 9), Some(SentimentColor::Moccasin));

    let reply_first: RolePriority = "author,reply,retweet,mention".parse().unwrap();
    let mut out = build(&records);
    resolve(&mut out.graph, &out.tables, &reply_first, AmbiguityPolicy::FirstMatch);
    assert_eq!(color_of(&out.graph, 9), Some(SentimentColor::Maroon));
}

/// Ids in the role tables and in the graph come in different representations
/// ("123" as author, 123.0 as a reply target). Outcome: they still match.
#[test]
fn lookup_is_representation_independent() {
    let records = vec![
        TweetRecord::new("500", "123", "numeric").with_color(SentimentColor::Teal),
        TweetRecord::new(501u64, 7u64, "other").reply_to(123.0f64, "numeric"),
    ];
    let mut out = build(&records);
    resolve(&mut out.graph, &out.tables, &RolePriority::default(), AmbiguityPolicy::FirstMatch);
    assert_eq!(color_of(&out.graph, 123), Some(SentimentColor::Teal));
    // 7 authored an uncolored post and was never a target of a colored one.
    assert_eq!(color_of(&out.graph, 7), None);
}

/// An author posts twice with different colors. Outcome: the first post in record order
/// wins under `FirstMatch` (counted as ambiguous); `Blank` leaves the node unresolved.
#[test]
fn conflicting_colors_follow_policy() {
    let records = vec![
        post(1, 4, "flip", SentimentColor::Teal),
        post(2, 4, "flip", SentimentColor::Maroon),
        post(3, 4, "flip", SentimentColor::Moccasin),
    ];

    let mut out = build(&records);
    assert_eq!(out.tables.conflicts(), 1);
    let stats = resolve(&mut out.graph, &out.tables, &RolePriority::default(), AmbiguityPolicy::FirstMatch);
    assert_eq!(color_of(&out.graph, 4), Some(SentimentColor::Teal));
    assert_eq!(stats.ambiguous, 1);

    let mut out = build(&records);
    let stats = resolve(&mut out.graph, &out.tables, &RolePriority::default(), AmbiguityPolicy::Blank);
    assert_eq!(color_of(&out.graph, 4), None);
    assert_eq!(stats.unresolved, 1);
}

/// Agreeing repeats are not ambiguous.
#[test]
fn agreeing_repeats_are_not_conflicts() {
    let records = vec![post(1, 4, "same", SentimentColor::Teal), post(2, 4, "same", SentimentColor::Teal)];
    let out = build(&records);
    assert_eq!(out.tables.conflicts(), 0);
}

/// An uncolored record registers nothing; a score alone is enough to derive a color.
#[test]
fn score_only_records_are_colored() {
    let records = vec![
        TweetRecord::new(1u64, 1u64, "a").reply_to(2u64, "b"),
        TweetRecord::new(2u64, 3u64, "c").with_score(-0.9),
    ];
    let mut out = build(&records);
    let stats = resolve(&mut out.graph, &out.tables, &RolePriority::default(), AmbiguityPolicy::FirstMatch);
    assert_eq!(color_of(&out.graph, 1), None);
    assert_eq!(color_of(&out.graph, 2), None);
    assert_eq!(color_of(&out.graph, 3), Some(SentimentColor::Maroon));
    assert_eq!(stats.unresolved, 2);
}

/// Priority strings are validated.
#[test]
fn role_priority_parsing() {
    let p: RolePriority = "Author; mention retweet,reply".parse().unwrap();
    assert_eq!(p, RolePriority::default());
    assert_eq!(p.to_string(), "author,mention,retweet,reply");

    assert_eq!("".parse::<RolePriority>().unwrap_err(), ConfigError::EmptyPriority);
    assert!(matches!("author,author".parse::<RolePriority>(), Err(ConfigError::DuplicateRole(_))));
    assert!(matches!("author,quote".parse::<RolePriority>(), Err(ConfigError::UnknownRole(_))));
    assert_eq!("blank".parse::<AmbiguityPolicy>().unwrap(), AmbiguityPolicy::Blank);
}
