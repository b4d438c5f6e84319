//! Analysis engine façade
//!
//! Composes the aspect analyzer, sarcasm detector, heuristic assigner, and
//! fusion policy behind one reentrant, lock-free entry point. The engine is
//! `Send + Sync` and safe to share behind an `Arc` across requests.

use crate::fusion;
use crate::heuristic;
use crate::lexicon::Lexicon;
use crate::sarcasm::SarcasmDetector;
use aspectlens_core::{
    Aspect, AspectSentiments, Result, ReviewAnalysis, SarcasmFeatures, Sentiment,
};
use std::sync::Arc;

/// Heuristic review analysis engine over an immutable lexicon
pub struct AnalysisEngine {
    detector: SarcasmDetector,
}

impl AnalysisEngine {
    /// Create an engine over the default shared lexicon
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Arc::new(Lexicon::new()))
    }

    /// Create an engine with an injected lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            detector: SarcasmDetector::new(lexicon)?,
        })
    }

    /// Per-aspect sentiment breakdown for the text
    pub fn aspect_sentiments(&self, text: &str, aspects: &[Aspect]) -> AspectSentiments {
        self.detector.analyzer().analyze(text, aspects)
    }

    /// Sarcasm/contrast features derived from aspect analysis
    pub fn features(&self, text: &str, aspects: &[Aspect]) -> SarcasmFeatures {
        self.detector.detect(text, aspects)
    }

    /// Heuristic three-way label (aspect counts + sarcasm rules only)
    pub fn heuristic_label(&self, text: &str, aspects: &[Aspect]) -> Sentiment {
        heuristic::assign(&self.features(text, aspects))
    }

    /// Full analysis over the canonical aspect set, fusing the supplied
    /// model label with the aspect-level signals
    pub fn analyze(&self, text: &str, model_sentiment: Sentiment) -> ReviewAnalysis {
        self.analyze_with_aspects(text, &Aspect::ALL, model_sentiment)
    }

    /// Full analysis over an explicit aspect list
    pub fn analyze_with_aspects(
        &self,
        text: &str,
        aspects: &[Aspect],
        model_sentiment: Sentiment,
    ) -> ReviewAnalysis {
        let features = self.detector.detect(text, aspects);
        let heuristic_sentiment = heuristic::assign(&features);
        let final_sentiment = fusion::fuse(model_sentiment, &features.aspect_sentiments);

        tracing::debug!(
            %model_sentiment,
            %heuristic_sentiment,
            %final_sentiment,
            pos_count = features.pos_count,
            neg_count = features.neg_count,
            "analysis complete"
        );

        ReviewAnalysis {
            final_sentiment,
            model_sentiment,
            heuristic_sentiment,
            aspects: features.aspect_sentiments,
        }
    }
}
