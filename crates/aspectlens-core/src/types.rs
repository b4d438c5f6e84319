//! Core types for AspectLens

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Three-way review sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map an arbitrary label string to a sentiment.
    ///
    /// Unknown labels fall back to `Neutral` so a misbehaving model can
    /// never produce an out-of-vocabulary response label.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            l if l.eq_ignore_ascii_case("positive") => Self::Positive,
            l if l.eq_ignore_ascii_case("negative") => Self::Negative,
            l if l.eq_ignore_ascii_case("neutral") => Self::Neutral,
            other => {
                tracing::debug!(label = other, "unmapped model label, using Neutral");
                Self::Neutral
            }
        }
    }

    /// Get the canonical label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-aspect sentiment label.
///
/// Extends [`Sentiment`] with `Not Mentioned` for aspects that never occur
/// in the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectSentiment {
    Positive,
    Negative,
    Neutral,
    #[serde(rename = "Not Mentioned")]
    NotMentioned,
}

impl AspectSentiment {
    /// Whether the aspect was mentioned at all
    pub fn is_mentioned(&self) -> bool {
        !matches!(self, Self::NotMentioned)
    }

    /// Get the canonical label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::NotMentioned => "Not Mentioned",
        }
    }
}

impl fmt::Display for AspectSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed named product attribute that sentiment can attach to
/// independently of the overall review label.
///
/// The variant order is the canonical aspect order shared with callers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Battery,
    Screen,
    Delivery,
    Price,
    Quality,
    Performance,
    Camera,
    Sound,
    Storage,
}

impl Aspect {
    /// The full aspect set, in canonical order
    pub const ALL: [Aspect; 9] = [
        Aspect::Battery,
        Aspect::Screen,
        Aspect::Delivery,
        Aspect::Price,
        Aspect::Quality,
        Aspect::Performance,
        Aspect::Camera,
        Aspect::Sound,
        Aspect::Storage,
    ];

    /// Get the aspect name used in lexicon lookups and wire payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Screen => "screen",
            Self::Delivery => "delivery",
            Self::Price => "price",
            Self::Quality => "quality",
            Self::Performance => "performance",
            Self::Camera => "camera",
            Self::Sound => "sound",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aspect {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Aspect::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| crate::Error::config(format!("unknown aspect: {s}")))
    }
}

/// Per-aspect sentiment breakdown for one analyzed text.
///
/// Contains exactly one entry for every requested aspect; iteration order
/// follows the canonical aspect order.
pub type AspectSentiments = BTreeMap<Aspect, AspectSentiment>;

/// Features derived from aspect-level analysis plus sarcasm/contrast scans
#[derive(Debug, Clone, Serialize)]
pub struct SarcasmFeatures {
    /// Number of aspects labeled Positive
    pub pos_count: usize,

    /// Number of aspects labeled Negative
    pub neg_count: usize,

    /// Number of aspects labeled Neutral (mentioned, balanced)
    pub neu_count: usize,

    /// Sarcasm-marker phrase hit, or mixed positive+negative aspects
    pub sarcasm: bool,

    /// Contrastive conjunction present as a whole word
    pub contrast: bool,

    /// The underlying per-aspect breakdown
    pub aspect_sentiments: AspectSentiments,
}

/// Complete analysis outcome for one review text
#[derive(Debug, Clone, Serialize)]
pub struct ReviewAnalysis {
    /// Label shown to the caller (model label after fusion overrides)
    #[serde(rename = "sentiment")]
    pub final_sentiment: Sentiment,

    /// Raw label from the statistical model
    pub model_sentiment: Sentiment,

    /// Label from the heuristic assigner, for comparison
    pub heuristic_sentiment: Sentiment,

    /// Per-aspect breakdown
    pub aspects: AspectSentiments,
}
