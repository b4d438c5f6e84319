//! Linear sentiment model over a vectorizer
//!
//! Stands in for an externally trained linear classifier: per-class weight
//! rows and biases are supplied in memory, and prediction is an argmax of
//! decision values over the vectorized text. The weights never change after
//! construction, so the model can be shared freely across requests.

use crate::model::{Prediction, SentimentModel};
use crate::vectorizer::Vectorizer;
use aspectlens_core::{Error, Result, Sentiment};
use std::sync::Arc;
use std::time::Instant;

pub struct LinearModel {
    name: String,
    vectorizer: Arc<dyn Vectorizer>,
    classes: Vec<Sentiment>,
    // One weight row per class, each as wide as the vectorizer output.
    weights: Vec<Vec<f32>>,
    biases: Vec<f32>,
}

impl LinearModel {
    /// Create a linear model from per-class weight rows and biases.
    ///
    /// Fails when the shapes disagree with each other or with the
    /// vectorizer width.
    pub fn new(
        name: impl Into<String>,
        vectorizer: Arc<dyn Vectorizer>,
        classes: Vec<Sentiment>,
        weights: Vec<Vec<f32>>,
        biases: Vec<f32>,
    ) -> Result<Self> {
        if classes.is_empty() {
            return Err(Error::model("linear model needs at least one class"));
        }
        if weights.len() != classes.len() || biases.len() != classes.len() {
            return Err(Error::model(format!(
                "class count mismatch: {} classes, {} weight rows, {} biases",
                classes.len(),
                weights.len(),
                biases.len()
            )));
        }
        if let Some(row) = weights.iter().find(|row| row.len() != vectorizer.dim()) {
            return Err(Error::model(format!(
                "weight row width {} does not match vectorizer width {}",
                row.len(),
                vectorizer.dim()
            )));
        }

        Ok(Self {
            name: name.into(),
            vectorizer,
            classes,
            weights,
            biases,
        })
    }
}

#[async_trait::async_trait]
impl SentimentModel for LinearModel {
    async fn predict(&self, cleaned_text: &str) -> Result<Prediction> {
        let start = Instant::now();
        let features = self.vectorizer.vectorize(cleaned_text);

        let mut best = 0usize;
        let mut best_value = f32::NEG_INFINITY;
        for (i, (row, bias)) in self.weights.iter().zip(&self.biases).enumerate() {
            let value: f32 = row.iter().zip(&features).map(|(w, x)| w * x).sum::<f32>() + bias;
            // Ties resolve to the first class for determinism.
            if value > best_value {
                best = i;
                best_value = value;
            }
        }

        tracing::trace!(model = %self.name, class = %self.classes[best], "linear decision");

        Ok(Prediction {
            label: self.classes[best],
            score: sigmoid(best_value),
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
