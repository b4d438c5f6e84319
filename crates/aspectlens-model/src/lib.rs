//! AspectLens Model
//!
//! The statistical-model seam consumed by the web boundary. The heuristic
//! engine never depends on this crate; it only sees the model's label.
//!
//! Provides:
//! - The `SentimentModel` trait and `Prediction` result type
//! - The `Vectorizer` trait with a stateless `HashingVectorizer`
//! - `LinearModel`: argmax linear scorer over vectorized text
//! - `LexiconModel`: lexicon fallback used when no model is configured

pub mod lexicon_model;
pub mod linear;
pub mod model;
pub mod vectorizer;

pub use lexicon_model::LexiconModel;
pub use linear::LinearModel;
pub use model::{Prediction, SentimentModel};
pub use vectorizer::{HashingVectorizer, Vectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::lexicon_model::LexiconModel;
    pub use crate::linear::LinearModel;
    pub use crate::model::{Prediction, SentimentModel};
    pub use crate::vectorizer::{HashingVectorizer, Vectorizer};
}
