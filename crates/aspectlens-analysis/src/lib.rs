//! AspectLens Analysis
//!
//! Heuristic aspect-based sentiment analysis for product reviews.
//!
//! The engine is built from small deterministic pieces:
//! - Lexicon: immutable word/phrase tables (synonyms, polarity words,
//!   negative phrases, priority phrases, intensifiers)
//! - Clause segmenter: splits text on punctuation and contrastive
//!   conjunctions to keep scoring local to a mention
//! - Aspect analyzer: mention detection, context scoping, and polarity
//!   scoring with negation/intensifier handling
//! - Sarcasm detector: marker phrases and mixed-signal features
//! - Heuristic assigner and fusion policy: turn the signals into one
//!   three-way label, optionally layered over a statistical model's output
//!
//! Everything is pure and lock-free over the shared lexicon; one analysis
//! call completes synchronously and is reentrant across threads.

pub mod aspect;
pub mod clause;
pub mod engine;
pub mod fusion;
pub mod heuristic;
pub mod lexicon;
pub mod sarcasm;

pub use aspect::AspectAnalyzer;
pub use clause::ClauseSegmenter;
pub use engine::AnalysisEngine;
pub use fusion::fuse;
pub use heuristic::assign;
pub use lexicon::Lexicon;
pub use sarcasm::SarcasmDetector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aspect::AspectAnalyzer;
    pub use crate::clause::ClauseSegmenter;
    pub use crate::engine::AnalysisEngine;
    pub use crate::lexicon::Lexicon;
    pub use crate::sarcasm::SarcasmDetector;
    pub use aspectlens_core::prelude::*;
}
