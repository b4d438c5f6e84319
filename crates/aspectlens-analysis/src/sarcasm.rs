//! Sarcasm and contrast detection
//!
//! Derives mixed-signal features from the aspect-level breakdown and scans
//! for fixed sarcasm-marker phrases and contrastive conjunctions.

use crate::aspect::AspectAnalyzer;
use crate::lexicon::Lexicon;
use aho_corasick::AhoCorasick;
use aspectlens_core::{Aspect, AspectSentiment, Error, Result, SarcasmFeatures};
use regex::Regex;
use std::sync::Arc;

/// Marker phrases commonly used in sarcastic review phrasing
const SARCASM_MARKERS: &[&str] = &[
    "which is great",
    "which is awesome",
    "i love how",
    "i love",
    "love how",
    "i thanks",
    "doubles as",
    "hand warmer",
    "teaches patience",
    "forces me",
    "i always enjoy",
    "i appreciate",
    "i appreciate how",
    "if you like",
    "if you enjoy",
    "it doubles as",
    "so fast that",
    "best thing about",
    "finally, a",
    "thanks for sending",
    "my favorite",
    "would recommend with caveats",
    "sarcasm",
];

/// Detects sarcastic and contrastive phrasing on top of aspect analysis
pub struct SarcasmDetector {
    analyzer: AspectAnalyzer,
    markers: AhoCorasick,
    contrast: Regex,
}

impl SarcasmDetector {
    /// Create a detector backed by the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        let markers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SARCASM_MARKERS)
            .map_err(|e| Error::analysis(format!("failed to build sarcasm matcher: {e}")))?;

        let contrast = Regex::new(r"\b(?:but|though|however|although|yet)\b")
            .map_err(|e| Error::analysis(format!("failed to build contrast matcher: {e}")))?;

        Ok(Self {
            analyzer: AspectAnalyzer::new(lexicon)?,
            markers,
            contrast,
        })
    }

    /// Access the underlying aspect analyzer
    pub fn analyzer(&self) -> &AspectAnalyzer {
        &self.analyzer
    }

    /// Compute sarcasm features for the text.
    ///
    /// `sarcasm` is set by a marker-phrase hit or by simultaneous positive
    /// and negative aspect labels (mixed-signal heuristic); `contrast` by a
    /// whole-word contrastive conjunction anywhere in the text.
    pub fn detect(&self, text: &str, aspects: &[Aspect]) -> SarcasmFeatures {
        let aspect_sentiments = self.analyzer.analyze(text, aspects);

        let pos_count = aspect_sentiments
            .values()
            .filter(|s| **s == AspectSentiment::Positive)
            .count();
        let neg_count = aspect_sentiments
            .values()
            .filter(|s| **s == AspectSentiment::Negative)
            .count();
        let neu_count = aspect_sentiments
            .values()
            .filter(|s| **s == AspectSentiment::Neutral)
            .count();

        let lowered = text.to_lowercase();
        let mut sarcasm = self.markers.is_match(&lowered);
        if pos_count > 0 && neg_count > 0 {
            // Praising one aspect while condemning another reads as
            // sarcastic/mixed for labeling purposes.
            sarcasm = true;
        }

        let contrast = self.contrast.is_match(&lowered);

        SarcasmFeatures {
            pos_count,
            neg_count,
            neu_count,
            sarcasm,
            contrast,
            aspect_sentiments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> SarcasmDetector {
        SarcasmDetector::new(Arc::new(Lexicon::new())).unwrap()
    }

    #[test]
    fn test_marker_phrase_sets_sarcasm() {
        let features = detector().detect(
            "I love how the battery doubles as a hand warmer.",
            &Aspect::ALL,
        );
        assert!(features.sarcasm);
    }

    #[test]
    fn test_mixed_aspects_imply_sarcasm() {
        let features = detector().detect("Good camera but overpriced.", &Aspect::ALL);
        assert!(features.pos_count > 0);
        assert!(features.neg_count > 0);
        assert!(features.sarcasm);
        assert!(features.contrast);
    }

    #[test]
    fn test_plain_positive_review() {
        let features = detector().detect(
            "The battery life is amazing! I used it for two full days without charging.",
            &Aspect::ALL,
        );
        assert_eq!(features.pos_count, 1);
        assert_eq!(features.neg_count, 0);
        assert!(!features.sarcasm);
        assert!(!features.contrast);
    }

    #[test]
    fn test_counts_exclude_unmentioned() {
        let features = detector().detect("", &Aspect::ALL);
        assert_eq!(features.pos_count, 0);
        assert_eq!(features.neg_count, 0);
        assert_eq!(features.neu_count, 0);
        assert_eq!(features.aspect_sentiments.len(), Aspect::ALL.len());
    }

    #[test]
    fn test_contrast_is_whole_word() {
        let features = detector().detect("butter on my toast", &Aspect::ALL);
        assert!(!features.contrast);
    }
}
