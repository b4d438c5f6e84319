//! Clause segmentation
//!
//! Splits review text into clauses on sentence punctuation and contrastive
//! conjunctions so that sentiment scoring stays local to the clause an
//! aspect is mentioned in ("good camera but overpriced" must not credit
//! "good" to the price aspect).

use aspectlens_core::{Error, Result};
use regex::Regex;

/// Splits lowercased text into ordered, trimmed clauses
pub struct ClauseSegmenter {
    splitter: Regex,
}

impl ClauseSegmenter {
    /// Build the segmenter with its compiled split pattern
    pub fn new() -> Result<Self> {
        let splitter = Regex::new(r"\b(?:but|though|however|although|yet)\b|[.,;:!?]")
            .map_err(|e| Error::analysis(format!("failed to build clause splitter: {e}")))?;
        Ok(Self { splitter })
    }

    /// Split text into clauses, discarding separators and empty segments.
    ///
    /// Clauses are trimmed but not otherwise normalized; the input is
    /// expected to already be lowercased.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.splitter
            .split(text)
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .collect()
    }
}
