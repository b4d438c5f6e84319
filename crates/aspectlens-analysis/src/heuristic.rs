//! Heuristic three-way label assignment
//!
//! A pure decision table over the derived sarcasm features. "Not Mentioned"
//! aspects never reach this table; only the derived counts do.

use aspectlens_core::{SarcasmFeatures, Sentiment};

/// Assign a three-way label from aspect counts and sarcasm/contrast flags.
///
/// Rules, in order:
/// 1. Only positive aspects: Positive, unless sarcasm and contrast are both
///    set (the confident call is suppressed to Neutral).
/// 2. Only negative aspects: Negative, with the same sarcasm suppression.
/// 3. Both present: Neutral (mixed review).
/// 4. Neither present: Neutral.
pub fn assign(features: &SarcasmFeatures) -> Sentiment {
    let pos = features.pos_count;
    let neg = features.neg_count;
    let suppressed = features.sarcasm && features.contrast;

    if pos > 0 && neg == 0 {
        if suppressed {
            return Sentiment::Neutral;
        }
        return Sentiment::Positive;
    }
    if neg > 0 && pos == 0 {
        if suppressed {
            return Sentiment::Neutral;
        }
        return Sentiment::Negative;
    }
    if pos > 0 && neg > 0 {
        return Sentiment::Neutral;
    }

    Sentiment::Neutral
}
