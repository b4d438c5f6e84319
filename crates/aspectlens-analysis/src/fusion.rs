//! Final label fusion
//!
//! A single statistical label cannot represent a review that praises one
//! aspect and condemns another. The fusion policy layers aspect counts over
//! the model's prediction as a tie-breaking signal.

use aspectlens_core::{AspectSentiment, AspectSentiments, Sentiment};

/// Minimum balance ratio at which a mixed review is called Neutral
const BALANCE_RATIO: f64 = 0.4;

/// Fuse the model's label with the aspect-level breakdown.
///
/// The model label stands unless at least two aspects carry polarity and
/// both sides are represented. Then: a balance ratio of at least 0.4 makes
/// the review Neutral; one side dominating by more than 2x wins outright;
/// anything in between leaves the model label unchanged.
pub fn fuse(model_sentiment: Sentiment, aspect_sentiments: &AspectSentiments) -> Sentiment {
    let positive_count = aspect_sentiments
        .values()
        .filter(|s| **s == AspectSentiment::Positive)
        .count();
    let negative_count = aspect_sentiments
        .values()
        .filter(|s| **s == AspectSentiment::Negative)
        .count();
    let total_mentioned = positive_count + negative_count;

    if total_mentioned >= 2 && positive_count > 0 && negative_count > 0 {
        let ratio = positive_count.min(negative_count) as f64
            / positive_count.max(negative_count) as f64;

        if ratio >= BALANCE_RATIO {
            tracing::debug!(positive_count, negative_count, ratio, "balanced mixed review");
            return Sentiment::Neutral;
        }
        if positive_count > negative_count * 2 {
            return Sentiment::Positive;
        }
        if negative_count > positive_count * 2 {
            return Sentiment::Negative;
        }
    }

    model_sentiment
}
