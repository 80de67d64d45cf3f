//! Sentiment display vocabulary: the discretized interpretation of a compound score and
//! the node color it maps to. The graph core only consumes colors; scoring happens upstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentColor {
    Teal,
    #[serde(alias = "light_blue")]
    LightBlue,
    Moccasin,
    #[serde(alias = "misty_rose")]
    MistyRose,
    Maroon,
}

impl SentimentColor {
    pub const ALL: [SentimentColor; 5] = [
        SentimentColor::Teal,
        SentimentColor::LightBlue,
        SentimentColor::Moccasin,
        SentimentColor::MistyRose,
        SentimentColor::Maroon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentColor::Teal => "teal",
            SentimentColor::LightBlue => "lightblue",
            SentimentColor::Moccasin => "moccasin",
            SentimentColor::MistyRose => "mistyrose",
            SentimentColor::Maroon => "maroon",
        }
    }

    pub fn from_score(score: f64) -> Self {
        Interpretation::from_score(score).color()
    }
}

impl fmt::Display for SentimentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentColor {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SentimentColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sentiment color {s:?}"))
    }
}

/// Five-band reading of a compound sentiment score in [-1, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interpretation {
    StronglyPositive,
    WeaklyPositive,
    Neutral,
    WeaklyNegative,
    StronglyNegative,
}

impl Interpretation {
    /// Bands: `> 0.25`, `(0.05, 0.25]`, `[-0.05, 0.05]`, `[-0.25, -0.05)`, `< -0.25`.
    /// NaN reads as neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.25 {
            Interpretation::StronglyPositive
        } else if score > 0.05 {
            Interpretation::WeaklyPositive
        } else if score >= -0.05 || score.is_nan() {
            Interpretation::Neutral
        } else if score >= -0.25 {
            Interpretation::WeaklyNegative
        } else {
            Interpretation::StronglyNegative
        }
    }

    pub fn color(self) -> SentimentColor {
        match self {
            Interpretation::StronglyPositive => SentimentColor::Teal,
            Interpretation::WeaklyPositive => SentimentColor::LightBlue,
            Interpretation::Neutral => SentimentColor::Moccasin,
            Interpretation::WeaklyNegative => SentimentColor::MistyRose,
            Interpretation::StronglyNegative => SentimentColor::Maroon,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Interpretation::StronglyPositive => "++",
            Interpretation::WeaklyPositive => "+",
            Interpretation::Neutral => " ",
            Interpretation::WeaklyNegative => "-",
            Interpretation::StronglyNegative => "--",
        }
    }
}
