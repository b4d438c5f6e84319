//! Aspect-level sentiment analysis
//!
//! For every requested aspect: locate mentions by substring synonym
//! matching, scope each mention to its clause (or a word window when no
//! clause matches), suppress mentions claimed by another aspect's priority
//! phrase, then score the context with negation and intensifier handling.

use crate::clause::ClauseSegmenter;
use crate::lexicon::Lexicon;
use aspectlens_core::{Aspect, AspectSentiment, AspectSentiments, Result};
use std::sync::Arc;

/// Per-aspect sentiment analyzer over an immutable lexicon
pub struct AspectAnalyzer {
    lexicon: Arc<Lexicon>,
    segmenter: ClauseSegmenter,
}

impl AspectAnalyzer {
    /// Create an analyzer backed by the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Ok(Self {
            lexicon,
            segmenter: ClauseSegmenter::new()?,
        })
    }

    /// Access the backing lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze sentiment for each requested aspect.
    ///
    /// Every requested aspect appears exactly once in the result. Empty or
    /// unmatched input degrades to all-`Not Mentioned`, never an error.
    pub fn analyze(&self, text: &str, aspects: &[Aspect]) -> AspectSentiments {
        // Punctuation is kept: it drives clause segmentation, and the
        // substring synonym match tolerates attached marks.
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let clauses = self.segmenter.segment(&lowered);

        let mut results = AspectSentiments::new();
        for &aspect in aspects {
            let label = self.analyze_one(aspect, &words, &clauses);
            results.insert(aspect, label);
        }
        results
    }

    fn analyze_one(&self, aspect: Aspect, words: &[&str], clauses: &[&str]) -> AspectSentiment {
        let terms = self.lexicon.terms_for(aspect);

        // The clause context is the first clause containing any synonym
        // term; every mention of this aspect reuses it. The word window is
        // only a fallback for when no clause matches.
        let clause_context = clauses
            .iter()
            .copied()
            .find(|clause| terms.iter().any(|term| clause.contains(term)));

        let mut aspect_score: i32 = 0;
        let mut occurrences: usize = 0;

        for i in 0..words.len() {
            if !is_mention(words, i, terms) {
                continue;
            }

            let context_words: Vec<&str> = match clause_context {
                Some(clause) => clause.split_whitespace().collect(),
                None => {
                    let start = i.saturating_sub(5);
                    let end = (i + 6).min(words.len());
                    words[start..end].to_vec()
                }
            };
            let context = context_words.join(" ");

            // Another aspect's priority phrase claims this context: the
            // mention is skipped outright, not reassigned.
            if let Some(owner) = self.lexicon.priority_aspect(&context) {
                if owner != aspect {
                    tracing::trace!(
                        aspect = %aspect,
                        owner = %owner,
                        context = %context,
                        "mention suppressed by priority phrase"
                    );
                    continue;
                }
            }

            let vote = self.score_context(&context_words, &context);
            tracing::debug!(aspect = %aspect, context = %context, vote, "scored occurrence");

            aspect_score += vote;
            occurrences += 1;
        }

        if occurrences == 0 {
            AspectSentiment::NotMentioned
        } else if aspect_score > 0 {
            AspectSentiment::Positive
        } else if aspect_score < 0 {
            AspectSentiment::Negative
        } else {
            AspectSentiment::Neutral
        }
    }

    /// Score one context and return its occurrence vote (+1, -1, or 0)
    fn score_context(&self, context_words: &[&str], context: &str) -> i32 {
        let mut pos_count: i32 = 0;
        let mut neg_count: i32 = 0;
        let mut neu_count: i32 = 0;

        for (j, raw_word) in context_words.iter().enumerate() {
            let word = strip_marks(raw_word);

            // An intensifier directly before a polarity word doubles it.
            let multiplier = if j > 0 && self.lexicon.is_intensifier(strip_marks(context_words[j - 1]))
            {
                2
            } else {
                1
            };

            if self.lexicon.is_positive(word) {
                pos_count += multiplier;
            } else if self.lexicon.is_negative(word) {
                neg_count += multiplier;
            } else if self.lexicon.is_neutral(word) {
                neu_count += 1;
            }

            // "not"/"no" directly before a positive word flips it, with the
            // positive decrement floored at zero.
            if (word == "not" || word == "no") && j + 1 < context_words.len() {
                let next = strip_marks(context_words[j + 1]);
                if self.lexicon.is_positive(next) {
                    neg_count += 1;
                    pos_count = (pos_count - 1).max(0);
                }
            }
        }

        // A negative phrase anywhere in the context is a flat penalty on
        // top of the word-level counts.
        if self.lexicon.has_negative_phrase(context) {
            neg_count += 2;
        }

        if neu_count > 0 && pos_count == neg_count {
            0
        } else if pos_count > neg_count {
            1
        } else if neg_count > pos_count {
            -1
        } else {
            0
        }
    }
}

/// A word is a mention when any synonym term is a substring of it or of
/// its immediate neighbor on either side.
fn is_mention(words: &[&str], i: usize, terms: &[&'static str]) -> bool {
    terms.iter().any(|term| {
        words[i].contains(term)
            || (i > 0 && words[i - 1].contains(term))
            || (i + 1 < words.len() && words[i + 1].contains(term))
    })
}

/// Strip sentence punctuation from both ends of a word for lexicon lookup
fn strip_marks(word: &str) -> &str {
    word.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
}
