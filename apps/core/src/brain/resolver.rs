//! Response Resolver - decides which rule answers a message.
//!
//! Precedence, highest first:
//! 1. Farewell keywords
//! 2. FAQ whose reported confidence is at least [`CONFIDENCE_FLOOR`]
//! 3. Intent whose reported confidence is at least [`CONFIDENCE_FLOOR`]
//! 4. Any FAQ that cleared the matcher threshold (low-confidence fallback)
//! 5. Greeting keywords
//! 6. Generic fallback
//!
//! Matchers select with shortcut scores (1.0 / 0.85 / 0.9); the confidence
//! reported here is recomputed as plain word-overlap similarity.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

use super::faq::FaqMatcher;
use super::intent::IntentMatcher;
use super::response::{fill_placeholders, MatchResult, ResponseLabel};
use super::smalltalk::SmallTalkDetector;
use crate::knowledge::KnowledgeBase;

/// Reported confidence a FAQ or intent needs to be preferred
pub const CONFIDENCE_FLOOR: f32 = 0.4;

/// Fixed texts the resolver answers with
#[derive(Debug, Clone)]
pub struct ResponsePhrases {
    /// Answer to empty input
    pub empty_prompt: String,
    /// Answer to a farewell
    pub farewell: String,
    /// Greeting phrasings, one picked at random
    pub greetings: Vec<String>,
    /// Apologies when nothing matched, one picked at random
    pub fallbacks: Vec<String>,
}

impl Default for ResponsePhrases {
    fn default() -> Self {
        Self {
            empty_prompt: "Please enter a message.".to_string(),
            farewell: "Thank you for contacting us! Have a great day! 😊".to_string(),
            greetings: vec![
                "Hi! How can I help you today?".to_string(),
                "Hello! What can I assist you with?".to_string(),
                "Hey there! How may I help you?".to_string(),
                "Welcome! How can I support you today?".to_string(),
            ],
            fallbacks: vec![
                "I'm sorry, I didn't quite understand that. Could you please rephrase your question?"
                    .to_string(),
                "I'm not sure I understand. Can you provide more details?".to_string(),
                "Let me help you better. Could you ask your question in a different way?"
                    .to_string(),
                "I'm here to help! Could you clarify what you need assistance with?".to_string(),
            ],
        }
    }
}

/// Orchestrates detectors and matchers into a single response
#[derive(Debug, Clone, Default)]
pub struct ResponseResolver {
    smalltalk: SmallTalkDetector,
    intent_matcher: IntentMatcher,
    faq_matcher: FaqMatcher,
    phrases: ResponsePhrases,
}

impl ResponseResolver {
    /// Create a resolver with default keywords and phrasings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom phrasings
    pub fn with_phrases(phrases: ResponsePhrases) -> Self {
        Self {
            phrases,
            ..Self::default()
        }
    }

    /// Create a resolver with a custom small-talk detector
    pub fn with_smalltalk(mut self, smalltalk: SmallTalkDetector) -> Self {
        self.smalltalk = smalltalk;
        self
    }

    pub fn phrases(&self) -> &ResponsePhrases {
        &self.phrases
    }

    /// Answer to empty or whitespace-only input
    pub fn empty_prompt(&self) -> MatchResult {
        MatchResult::new(self.phrases.empty_prompt.clone(), None, 0.0)
    }

    /// Resolve a non-empty message.
    ///
    /// `context` is the sender's user context, used to fill `{key}`
    /// placeholders in intent responses.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        knowledge: &KnowledgeBase,
        text: &str,
        context: Option<&HashMap<String, String>>,
        rng: &mut R,
    ) -> MatchResult {
        if self.smalltalk.is_goodbye(text) {
            debug!("Resolved as goodbye");
            return MatchResult::new(
                self.phrases.farewell.clone(),
                Some(ResponseLabel::Goodbye),
                1.0,
            );
        }

        let faq_match = self
            .faq_matcher
            .match_faq(&knowledge.faqs, text)
            .map(|faq| (faq, FaqMatcher::confidence(faq, text)));

        let intent_match = self
            .intent_matcher
            .match_intent(&knowledge.intents, text)
            .map(|intent| (intent, IntentMatcher::confidence(intent, text)));

        debug!(
            faq_confidence = faq_match.map(|(_, c)| c),
            intent = intent_match.map(|(i, _)| i.name.as_str()),
            intent_confidence = intent_match.map(|(_, c)| c),
            "Matcher results"
        );

        if let Some((faq, confidence)) = faq_match {
            if confidence >= CONFIDENCE_FLOOR {
                return MatchResult::new(faq.answer.clone(), Some(ResponseLabel::Faq), confidence);
            }
        }

        if let Some((intent, confidence)) = intent_match {
            if confidence >= CONFIDENCE_FLOOR {
                let response = fill_placeholders(&intent.response, context);
                return MatchResult::new(
                    response,
                    Some(ResponseLabel::Intent(intent.name.clone())),
                    confidence,
                );
            }
        }

        if let Some((faq, confidence)) = faq_match {
            debug!("Falling back to low-confidence FAQ");
            return MatchResult::new(faq.answer.clone(), Some(ResponseLabel::Faq), confidence);
        }

        if self.smalltalk.is_greeting(text) {
            let response = pick(&self.phrases.greetings, rng);
            return MatchResult::new(response, Some(ResponseLabel::Greeting), 1.0);
        }

        let response = pick(&self.phrases.fallbacks, rng);
        MatchResult::new(response, Some(ResponseLabel::Fallback), 0.0)
    }
}

fn pick<R: Rng + ?Sized>(choices: &[String], rng: &mut R) -> String {
    choices.choose(rng).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{Faq, Intent};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn knowledge() -> KnowledgeBase {
        KnowledgeBase::empty()
            .with_faq(Faq::new("What is your return policy?", "30 days."))
            .with_intent(Intent::new(
                "track_order",
                ["track order", "where is my order"],
                "Your order {order_id} is in transit.",
            ))
    }

    #[test]
    fn test_goodbye_beats_faq() {
        let resolver = ResponseResolver::new();
        let mut rng = StdRng::seed_from_u64(7);

        let result = resolver.resolve(&knowledge(), "thanks, what is your return policy", None, &mut rng);
        assert_eq!(result.label(), Some("goodbye"));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_intent_without_context_keeps_placeholder() {
        let resolver = ResponseResolver::new();
        let mut rng = StdRng::seed_from_u64(7);

        let result = resolver.resolve(&knowledge(), "where is my order", None, &mut rng);
        assert_eq!(result.label(), Some("track_order"));
        assert_eq!(result.response, "Your order {order_id} is in transit.");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_greeting_and_fallback_draw_from_phrases() {
        let resolver = ResponseResolver::new();
        let mut rng = StdRng::seed_from_u64(7);
        let empty = KnowledgeBase::empty();

        let result = resolver.resolve(&empty, "hello", None, &mut rng);
        assert_eq!(result.label(), Some("greeting"));
        assert!(resolver.phrases().greetings.contains(&result.response));

        let result = resolver.resolve(&empty, "quantum chromodynamics", None, &mut rng);
        assert_eq!(result.label(), Some("fallback"));
        assert_eq!(result.confidence, 0.0);
        assert!(resolver.phrases().fallbacks.contains(&result.response));
    }

    #[test]
    fn test_same_seed_same_phrase() {
        let resolver = ResponseResolver::new();
        let empty = KnowledgeBase::empty();

        let a = resolver.resolve(&empty, "hey", None, &mut StdRng::seed_from_u64(42));
        let b = resolver.resolve(&empty, "hey", None, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.response, b.response);
    }

    #[test]
    fn test_empty_phrase_lists_yield_empty_response() {
        let resolver = ResponseResolver::with_phrases(ResponsePhrases {
            greetings: vec![],
            fallbacks: vec![],
            ..ResponsePhrases::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        let result = resolver.resolve(&KnowledgeBase::empty(), "zzz", None, &mut rng);
        assert_eq!(result.label(), Some("fallback"));
        assert_eq!(result.response, "");
    }

    #[test]
    fn test_empty_prompt() {
        let resolver = ResponseResolver::new();
        let result = resolver.empty_prompt();

        assert_eq!(result.response, "Please enter a message.");
        assert!(result.intent.is_none());
        assert_eq!(result.confidence, 0.0);
    }
}
