//! AspectLens Core
//!
//! Core types and utilities shared across AspectLens components.
//!
//! This crate provides:
//! - The closed sentiment and aspect label enumerations
//! - Result records exchanged between the analysis engine and its callers
//! - Error types and result handling
//! - Text normalization used before vectorization and lexicon comparison

pub mod error;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use text::clean_text;
pub use types::{
    Aspect, AspectSentiment, AspectSentiments, ReviewAnalysis, SarcasmFeatures, Sentiment,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::text::clean_text;
    pub use crate::types::{
        Aspect, AspectSentiment, AspectSentiments, ReviewAnalysis, SarcasmFeatures, Sentiment,
    };
}
