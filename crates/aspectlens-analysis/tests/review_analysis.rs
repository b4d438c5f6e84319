//! End-to-end tests for the heuristic analysis engine over the canonical
//! review corpus.

use aspectlens_analysis::AnalysisEngine;
use aspectlens_core::{Aspect, AspectSentiment, Sentiment};
use proptest::prelude::*;

fn engine() -> AnalysisEngine {
    AnalysisEngine::new().expect("engine construction")
}

#[test]
fn glowing_battery_review() {
    let engine = engine();
    let text = "The battery life is amazing! I used it for two full days without charging.";

    let aspects = engine.aspect_sentiments(text, &Aspect::ALL);
    assert_eq!(aspects[&Aspect::Battery], AspectSentiment::Positive);
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Positive);
}

#[test]
fn draining_battery_review() {
    let engine = engine();
    let text = "Battery drains too fast, barely lasts 4 hours.";

    let aspects = engine.aspect_sentiments(text, &Aspect::ALL);
    assert_eq!(aspects[&Aspect::Battery], AspectSentiment::Negative);
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Negative);
}

#[test]
fn smooth_performance_review() {
    let engine = engine();
    let text = "Great performance, very smooth and fast. Worth every rupee.";

    let aspects = engine.aspect_sentiments(text, &Aspect::ALL);
    assert_eq!(aspects[&Aspect::Performance], AspectSentiment::Positive);
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Positive);
}

#[test]
fn sluggish_device_review() {
    let engine = engine();
    let text = "Performance is very slow and the device hangs frequently.";

    let aspects = engine.aspect_sentiments(text, &Aspect::ALL);
    assert_eq!(aspects[&Aspect::Performance], AspectSentiment::Negative);
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Negative);
}

#[test]
fn delayed_shipping_review() {
    let engine = engine();
    let text = "Shipping was delayed by a week, very disappointing experience.";

    let aspects = engine.aspect_sentiments(text, &Aspect::ALL);
    assert_eq!(aspects[&Aspect::Delivery], AspectSentiment::Negative);
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Negative);
}

#[test]
fn lukewarm_review_is_not_a_bare_positive() {
    let engine = engine();
    let text = "The product works fine, but nothing extraordinary.";

    let features = engine.features(text, &Aspect::ALL);
    assert!(features.contrast);
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Neutral);
}

#[test]
fn mixed_camera_price_sound_review() {
    let engine = engine();
    let text = "Good camera but overpriced. Sound quality could be better.";

    let analysis = engine.analyze(text, Sentiment::Positive);
    assert_eq!(analysis.aspects[&Aspect::Camera], AspectSentiment::Positive);
    assert_eq!(analysis.aspects[&Aspect::Price], AspectSentiment::Negative);
    assert_eq!(analysis.aspects[&Aspect::Sound], AspectSentiment::Negative);
    // "sound quality" claims the quality mentions outright.
    assert_eq!(analysis.aspects[&Aspect::Quality], AspectSentiment::NotMentioned);

    // positive_count=1, negative_count=2: ratio 0.5 >= 0.4, balanced mix.
    assert_eq!(analysis.heuristic_sentiment, Sentiment::Neutral);
    assert_eq!(analysis.final_sentiment, Sentiment::Neutral);
}

#[test]
fn contrasting_quality_and_storage_review() {
    let engine = engine();
    let text = "Lightweight and stylish, but storage is very limited.";

    let analysis = engine.analyze(text, Sentiment::Positive);
    assert_eq!(analysis.aspects[&Aspect::Quality], AspectSentiment::Positive);
    assert_eq!(analysis.aspects[&Aspect::Storage], AspectSentiment::Negative);
    assert_eq!(analysis.heuristic_sentiment, Sentiment::Neutral);
    // 1 vs 1: perfectly balanced, fusion overrides the model.
    assert_eq!(analysis.final_sentiment, Sentiment::Neutral);
}

#[test]
fn text_without_aspect_terms() {
    let engine = engine();
    let text = "It was a gift.";

    let features = engine.features(text, &Aspect::ALL);
    assert_eq!(features.pos_count, 0);
    assert_eq!(features.neg_count, 0);
    assert_eq!(features.neu_count, 0);
    assert!(features
        .aspect_sentiments
        .values()
        .all(|label| *label == AspectSentiment::NotMentioned));
    assert_eq!(engine.heuristic_label(text, &Aspect::ALL), Sentiment::Neutral);
}

#[test]
fn analysis_keys_match_requested_aspects() {
    let engine = engine();
    let requested = [Aspect::Battery, Aspect::Camera];

    let aspects = engine.aspect_sentiments("Nice camera.", &requested);
    assert_eq!(aspects.len(), 2);
    assert!(aspects.contains_key(&Aspect::Battery));
    assert!(aspects.contains_key(&Aspect::Camera));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn analysis_is_total_and_well_formed(text in ".{0,200}") {
        let engine = engine();
        let analysis = engine.analyze(&text, Sentiment::Neutral);

        prop_assert_eq!(analysis.aspects.len(), Aspect::ALL.len());
        for label in analysis.aspects.values() {
            prop_assert!(matches!(
                label,
                AspectSentiment::Positive
                    | AspectSentiment::Negative
                    | AspectSentiment::Neutral
                    | AspectSentiment::NotMentioned
            ));
        }
        prop_assert!(matches!(
            analysis.final_sentiment,
            Sentiment::Positive | Sentiment::Negative | Sentiment::Neutral
        ));
    }

    #[test]
    fn analysis_is_idempotent(text in ".{0,200}") {
        let engine = engine();
        let first = engine.analyze(&text, Sentiment::Positive);
        let second = engine.analyze(&text, Sentiment::Positive);

        prop_assert_eq!(first.final_sentiment, second.final_sentiment);
        prop_assert_eq!(first.heuristic_sentiment, second.heuristic_sentiment);
        prop_assert_eq!(first.aspects, second.aspects);
    }
}
