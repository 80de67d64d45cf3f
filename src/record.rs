use crate::ids::RawId;
use crate::sentiment::SentimentColor;
use serde::{Deserialize, Serialize};

/// One staged post, already filtered and sentiment-scored upstream.
/// Only the first user mention is carried; extra fields in the JSON are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TweetRecord {
    pub id: Option<RawId>,

    #[serde(alias = "user_id")]
    pub author_id: Option<RawId>,
    #[serde(alias = "user_name")]
    pub author_name: Option<String>,

    pub in_reply_to_user_id: Option<RawId>,
    pub in_reply_to_screen_name: Option<String>,

    pub retweeted_id: Option<RawId>,
    pub retweeted_screen_name: Option<String>,

    #[serde(alias = "user_mention_id")]
    pub mention_id: Option<RawId>,
    #[serde(alias = "user_mention_screen_name")]
    pub mention_screen_name: Option<String>,

    #[serde(alias = "marker_color")]
    pub sentiment_color: Option<SentimentColor>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
}

impl TweetRecord {
    pub fn new(id: impl Into<RawId>, author_id: impl Into<RawId>, author_name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            author_id: Some(author_id.into()),
            author_name: Some(author_name.into()),
            ..Default::default()
        }
    }

    pub fn reply_to(mut self, id: impl Into<RawId>, name: impl Into<String>) -> Self {
        self.in_reply_to_user_id = Some(id.into());
        self.in_reply_to_screen_name = Some(name.into());
        self
    }

    pub fn retweet_of(mut self, id: impl Into<RawId>, name: impl Into<String>) -> Self {
        self.retweeted_id = Some(id.into());
        self.retweeted_screen_name = Some(name.into());
        self
    }

    pub fn mentioning(mut self, id: impl Into<RawId>, name: impl Into<String>) -> Self {
        self.mention_id = Some(id.into());
        self.mention_screen_name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: SentimentColor) -> Self {
        self.sentiment_color = Some(color);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.sentiment_score = Some(score);
        self
    }

    /// Explicit color wins; otherwise derive it from the score if one was attached.
    pub fn color(&self) -> Option<SentimentColor> {
        self.sentiment_color
            .or_else(|| self.sentiment_score.map(SentimentColor::from_score))
    }
}
