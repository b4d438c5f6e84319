//! Text vectorization for linear models

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Trait for turning normalized text into a numeric feature vector.
///
/// Consumed only by the statistical model, never by the heuristics.
pub trait Vectorizer: Send + Sync {
    /// Vectorize normalized text into a fixed-width feature vector
    fn vectorize(&self, cleaned_text: &str) -> Vec<f32>;

    /// The feature vector width
    fn dim(&self) -> usize;
}

/// Feature-hashing term-frequency vectorizer.
///
/// Stateless: no fitted vocabulary, so it needs no persistence and is
/// trivially shareable. Tokens are whitespace-split, hashed into `dim`
/// buckets, and the resulting counts are L2-normalized.
pub struct HashingVectorizer {
    dim: usize,
}

impl HashingVectorizer {
    /// Create a vectorizer with the given number of hash buckets
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() % self.dim as u64) as usize
    }
}

impl Vectorizer for HashingVectorizer {
    fn vectorize(&self, cleaned_text: &str) -> Vec<f32> {
        let mut features = vec![0.0f32; self.dim];
        for token in cleaned_text.split_whitespace() {
            features[self.bucket(token)] += 1.0;
        }

        let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }
        features
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_output() {
        let vectorizer = HashingVectorizer::new(64);
        assert_eq!(vectorizer.vectorize("great battery life").len(), 64);
        assert_eq!(vectorizer.vectorize("").len(), 64);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let vectorizer = HashingVectorizer::new(16);
        assert!(vectorizer.vectorize("").iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_deterministic() {
        let vectorizer = HashingVectorizer::new(128);
        assert_eq!(
            vectorizer.vectorize("battery drains too fast"),
            vectorizer.vectorize("battery drains too fast")
        );
    }

    #[test]
    fn test_l2_normalized() {
        let vectorizer = HashingVectorizer::new(128);
        let features = vectorizer.vectorize("good camera good price");
        let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }
}
