//! Lightweight lexicon-based sentiment model
//!
//! This is the fallback model used when no external classifier is
//! configured. It is intentionally coarse: the heuristic engine, not this
//! model, carries the aspect-level nuance.

use crate::model::{Prediction, SentimentModel};
use aho_corasick::AhoCorasick;
use aspectlens_core::{Error, Result, Sentiment};
use std::time::Instant;

pub struct LexiconModel {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconModel {
    pub fn new() -> Result<Self> {
        Self::with_name("sentiment-lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let positive = vec![
            "good",
            "great",
            "excellent",
            "love",
            "amazing",
            "wonderful",
            "perfect",
            "fantastic",
            "awesome",
            "best",
        ];
        let negative = vec![
            "bad",
            "terrible",
            "awful",
            "hate",
            "horrible",
            "worst",
            "broken",
            "useless",
            "disappointed",
            "poor",
        ];

        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(positive)
            .map_err(|e| Error::model(format!("Failed to build positive matcher: {e}")))?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(negative)
            .map_err(|e| Error::model(format!("Failed to build negative matcher: {e}")))?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait::async_trait]
impl SentimentModel for LexiconModel {
    async fn predict(&self, cleaned_text: &str) -> Result<Prediction> {
        let start = Instant::now();

        let positive_hits = self.positive.find_iter(cleaned_text).count() as f32;
        let negative_hits = self.negative.find_iter(cleaned_text).count() as f32;
        let total = positive_hits + negative_hits;

        let (label, score) = if total == 0.0 {
            (Sentiment::Neutral, 0.5)
        } else {
            let ratio = positive_hits / total;
            if ratio > 0.5 {
                (Sentiment::Positive, ratio)
            } else if ratio < 0.5 {
                (Sentiment::Negative, 1.0 - ratio)
            } else {
                (Sentiment::Neutral, 0.5)
            }
        };

        Ok(Prediction {
            label,
            score,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
