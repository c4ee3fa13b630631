//! Intent matching against the knowledge base intent catalog.
//!
//! Each pattern is scored against the input in one of two ways:
//! 1. Keyword containment: every word of the pattern appears in the input
//!    (scored [`KEYWORD_MATCH_SCORE`])
//! 2. Otherwise, word-overlap similarity between input and pattern
//!
//! The best pattern across the whole catalog wins if it clears
//! [`INTENT_THRESHOLD`]. The containment score is only used to pick the
//! winner; the confidence reported to callers comes from
//! [`IntentMatcher::confidence`].

use super::similarity::similarity;
use super::text::{normalize, token_set};
use crate::knowledge::Intent;

/// Minimum selection score for an intent to match
pub const INTENT_THRESHOLD: f32 = 0.4;

/// Selection score for a pattern whose words are all present in the input
pub const KEYWORD_MATCH_SCORE: f32 = 0.9;

/// Winning intent together with its selection score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentMatch<'a> {
    pub intent: &'a Intent,
    pub score: f32,
}

/// Scores free text against a catalog of intents
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    threshold: f32,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    pub fn new() -> Self {
        Self {
            threshold: INTENT_THRESHOLD,
        }
    }

    /// Selection score of a single pattern against already-normalized input
    fn pattern_score(normalized_input: &str, pattern: &str) -> f32 {
        // Pattern words are taken as written; catalogs are expected lower-case
        let pattern_words = token_set(pattern);
        let input_words = token_set(normalized_input);

        if !pattern_words.is_empty() && pattern_words.is_subset(&input_words) {
            KEYWORD_MATCH_SCORE
        } else {
            similarity(normalized_input, pattern)
        }
    }

    /// Find the best intent and its selection score.
    ///
    /// Ties keep the intent seen first.
    pub fn best_match<'a>(&self, intents: &'a [Intent], text: &str) -> Option<IntentMatch<'a>> {
        let normalized_input = normalize(text);
        let mut best: Option<IntentMatch<'a>> = None;
        let mut best_score: f32 = 0.0;

        for intent in intents {
            for pattern in &intent.patterns {
                let score = Self::pattern_score(&normalized_input, pattern);

                if score > best_score && score >= self.threshold {
                    best_score = score;
                    best = Some(IntentMatch { intent, score });
                }
            }
        }

        best
    }

    /// Match text to an intent
    pub fn match_intent<'a>(&self, intents: &'a [Intent], text: &str) -> Option<&'a Intent> {
        self.best_match(intents, text).map(|m| m.intent)
    }

    /// Reported confidence: the best plain similarity between the input and
    /// any of the intent's patterns. Never uses the containment shortcut.
    pub fn confidence(intent: &Intent, text: &str) -> f32 {
        let normalized_input = normalize(text);
        intent
            .patterns
            .iter()
            .map(|pattern| similarity(&normalized_input, pattern))
            .fold(0.0, f32::max)
    }
}
