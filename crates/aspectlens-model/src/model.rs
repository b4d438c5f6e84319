//! Sentiment model trait and prediction type

use aspectlens_core::{Result, Sentiment};
use async_trait::async_trait;

/// Trait for three-way sentiment models.
///
/// Implementations are loaded once at process start and shared read-only;
/// `predict` must not mutate shared state.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Predict a sentiment label for already-normalized text
    async fn predict(&self, cleaned_text: &str) -> Result<Prediction>;

    /// Get the model name
    fn name(&self) -> &str;
}

/// Result of a model prediction
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Predicted label
    pub label: Sentiment,

    /// Confidence score (0.0-1.0)
    pub score: f32,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: Sentiment, score: f32) -> Self {
        Self {
            label,
            score,
            latency_us: 0,
        }
    }
}
