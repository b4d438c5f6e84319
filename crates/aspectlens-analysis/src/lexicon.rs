//! Static lexicon driving the heuristic analysis
//!
//! All tables are built once and shared read-only across analysis calls.
//! Matching against these tables is substring-based and deliberately loose:
//! "charging" matches the synonym "charge", "overpriced" matches "price".
//! That partial-word behavior is part of the contract, not an accident.

use aspectlens_core::Aspect;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Immutable word and phrase tables for aspect and polarity matching
pub struct Lexicon {
    synonyms: HashMap<Aspect, Vec<&'static str>>,
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    neutral: HashSet<&'static str>,
    negative_phrases: Vec<&'static str>,
    // Ordered: the first phrase found in a context claims it for its aspect.
    phrase_priority: Vec<(&'static str, Aspect)>,
    intensifiers: HashSet<&'static str>,
}

impl Lexicon {
    /// Build the default lexicon
    pub fn new() -> Self {
        let mut synonyms: HashMap<Aspect, Vec<&'static str>> = HashMap::new();
        synonyms.insert(
            Aspect::Battery,
            vec!["battery", "charge", "charging", "power", "drain", "drains", "draining"],
        );
        synonyms.insert(Aspect::Screen, vec!["screen", "display", "monitor"]);
        synonyms.insert(
            Aspect::Delivery,
            vec![
                "delivery",
                "shipping",
                "ship",
                "shipped",
                "arrived",
                "packaging",
                "packaged",
                "packaged well",
            ],
        );
        synonyms.insert(
            Aspect::Price,
            vec!["price", "cost", "expensive", "cheap", "value", "pricing"],
        );
        synonyms.insert(
            Aspect::Quality,
            vec![
                "quality",
                "build",
                "material",
                "durability",
                "lightweight",
                "stylish",
                "sleek",
                "compact",
                "product",
                "item",
                "device",
            ],
        );
        synonyms.insert(
            Aspect::Performance,
            vec![
                "performance",
                "speed",
                "slow",
                "lag",
                "heat",
                "hot",
                "heating",
                "overheat",
                "overheating",
                "fast",
                "smooth",
                "hangs",
                "working",
                "works",
            ],
        );
        synonyms.insert(Aspect::Camera, vec!["camera", "photo", "picture", "image"]);
        synonyms.insert(
            Aspect::Sound,
            vec!["sound", "audio", "speaker", "speakers", "volume", "music", "headphone"],
        );
        synonyms.insert(
            Aspect::Storage,
            vec!["storage", "space", "memory", "sd-card", "sdcard"],
        );

        let positive = HashSet::from([
            "good",
            "great",
            "excellent",
            "amazing",
            "love",
            "fast",
            "best",
            "nice",
            "perfect",
            "awesome",
            "fantastic",
            "wonderful",
            "outstanding",
            "superb",
            "brilliant",
            "incredible",
            "stunning",
            "beautiful",
            "impressive",
            "solid",
            "strong",
            "vibrant",
            "clear",
            "sharp",
            "reliable",
            "durable",
            "smooth",
            "responsive",
            "efficient",
            "helpful",
            "friendly",
            "stylish",
            "lightweight",
            "sleek",
            "compact",
            "on time",
            "earlier",
            "crisp",
            "commendable",
        ]);

        let negative = HashSet::from([
            "bad",
            "terrible",
            "poor",
            "slow",
            "worst",
            "hate",
            "broken",
            "useless",
            "disappointed",
            "disappointing",
            "awful",
            "horrible",
            "pathetic",
            "mediocre",
            "inferior",
            "defective",
            "faulty",
            "damaged",
            "inadequate",
            "subpar",
            "unacceptable",
            "frustrating",
            "annoying",
            "sluggish",
            "lag",
            "lagging",
            "rude",
            "unhelpful",
            "overpriced",
            "expensive",
            "struggle",
            "struggles",
            "struggling",
            "low",
            "heat",
            "heats",
            "heating",
            "hot",
            "overheat",
            "limited",
            "drain",
            "drains",
            "draining",
            "delayed",
            "late",
            "scratches",
            "scratched",
            "hangs",
            "stopped",
            "dead",
            "died",
        ]);

        // Multi-word constructs the single-word tables cannot capture.
        let negative_phrases = vec![
            "needs improvement",
            "needs to improve",
            "needs improving",
            "too low",
            "low volume",
            "low light",
            "struggles in low light",
            "camera struggles",
            "limited storage",
            "storage limited",
            "heats up",
            "heats",
            "heating",
            "overheat",
            "overheating",
            "gets hot",
            "gets hot quickly",
            "hot quickly",
            "warms up quickly",
            "could be better",
            "could be improved",
            "could be lower",
            "not good",
            "not great",
            "stopped working",
            "not working",
            "drains fast",
            "drains too fast",
            "drains quickly",
            "barely lasts",
            "didn\u{2019}t respond",
            "did not respond",
        ];

        // When one of these phrases appears in a context, the sentiment
        // belongs to the mapped aspect and is suppressed for all others.
        let phrase_priority = vec![
            ("sound quality", Aspect::Sound),
            ("camera quality", Aspect::Camera),
            ("display quality", Aspect::Screen),
            ("screen quality", Aspect::Screen),
            ("battery life", Aspect::Battery),
            ("storage capacity", Aspect::Storage),
            ("limited storage", Aspect::Storage),
            ("speaker volume", Aspect::Sound),
            ("low volume", Aspect::Sound),
            ("fast delivery", Aspect::Delivery),
            ("fast shipping", Aspect::Delivery),
            ("build quality", Aspect::Quality),
        ];

        let neutral = HashSet::from([
            "okay",
            "ok",
            "fine",
            "decent",
            "average",
            "fair",
            "moderate",
            "acceptable",
            "standard",
            "normal",
            "usual",
            "ordinary",
            "reasonable",
            "sufficient",
            "adequate",
            "alright",
            "passable",
            "satisfactory",
            "tolerable",
        ]);

        let intensifiers = HashSet::from([
            "very",
            "extremely",
            "absolutely",
            "really",
            "incredibly",
            "totally",
            "completely",
            "way too",
            "definitely",
        ]);

        Self {
            synonyms,
            positive,
            negative,
            neutral,
            negative_phrases,
            phrase_priority,
            intensifiers,
        }
    }

    /// Process-wide shared lexicon, built on first use
    pub fn shared() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(Lexicon::new)
    }

    /// Synonym terms for an aspect, falling back to its literal name
    pub fn terms_for(&self, aspect: Aspect) -> &[&'static str] {
        self.synonyms
            .get(&aspect)
            .map(Vec::as_slice)
            .unwrap_or_else(|| fallback_terms(aspect))
    }

    /// Whether the word is in the positive table
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Whether the word is in the negative table
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Whether the word is in the neutral table
    pub fn is_neutral(&self, word: &str) -> bool {
        self.neutral.contains(word)
    }

    /// Whether the word doubles a following polarity hit
    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    /// Whether any negative phrase occurs inside the context string
    pub fn has_negative_phrase(&self, context: &str) -> bool {
        self.negative_phrases.iter().any(|p| context.contains(p))
    }

    /// The aspect claiming this context via the first matching priority
    /// phrase, if any
    pub fn priority_aspect(&self, context: &str) -> Option<Aspect> {
        self.phrase_priority
            .iter()
            .find(|(phrase, _)| context.contains(phrase))
            .map(|(_, aspect)| *aspect)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

fn fallback_terms(aspect: Aspect) -> &'static [&'static str] {
    match aspect {
        Aspect::Battery => &["battery"],
        Aspect::Screen => &["screen"],
        Aspect::Delivery => &["delivery"],
        Aspect::Price => &["price"],
        Aspect::Quality => &["quality"],
        Aspect::Performance => &["performance"],
        Aspect::Camera => &["camera"],
        Aspect::Sound => &["sound"],
        Aspect::Storage => &["storage"],
    }
}
