//! FAQ matching against the knowledge base question list.
//!
//! Exact normalized matches score 1.0, containment in either direction scores
//! 0.85, and anything else falls back to word-overlap similarity.

use super::similarity::similarity;
use super::text::normalize;
use crate::knowledge::Faq;

/// Minimum selection score for an FAQ to match
pub const FAQ_THRESHOLD: f32 = 0.35;

/// Selection score for an exact normalized match
pub const EXACT_MATCH_SCORE: f32 = 1.0;

/// Selection score when one normalized string contains the other
pub const CONTAINMENT_SCORE: f32 = 0.85;

/// Winning FAQ together with its selection score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqMatch<'a> {
    pub faq: &'a Faq,
    pub score: f32,
}

/// Scores free text against a list of FAQs
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    threshold: f32,
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FaqMatcher {
    pub fn new() -> Self {
        Self {
            threshold: FAQ_THRESHOLD,
        }
    }

    fn question_score(normalized_input: &str, normalized_question: &str) -> f32 {
        if normalized_input == normalized_question {
            EXACT_MATCH_SCORE
        } else if normalized_question.contains(normalized_input)
            || normalized_input.contains(normalized_question)
        {
            CONTAINMENT_SCORE
        } else {
            similarity(normalized_input, normalized_question)
        }
    }

    /// Find the best FAQ and its selection score.
    ///
    /// Ties keep the FAQ seen first.
    pub fn best_match<'a>(&self, faqs: &'a [Faq], text: &str) -> Option<FaqMatch<'a>> {
        let normalized_input = normalize(text);
        let mut best: Option<FaqMatch<'a>> = None;
        let mut best_score: f32 = 0.0;

        for faq in faqs {
            let normalized_question = normalize(&faq.question);
            let score = Self::question_score(&normalized_input, &normalized_question);

            if score > best_score && score >= self.threshold {
                best_score = score;
                best = Some(FaqMatch { faq, score });
            }
        }

        best
    }

    /// Match text to an FAQ
    pub fn match_faq<'a>(&self, faqs: &'a [Faq], text: &str) -> Option<&'a Faq> {
        self.best_match(faqs, text).map(|m| m.faq)
    }

    /// Reported confidence: plain similarity between input and question,
    /// regardless of the exact/containment shortcuts used for selection.
    pub fn confidence(faq: &Faq, text: &str) -> f32 {
        similarity(&normalize(text), &normalize(&faq.question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faqs() -> Vec<Faq> {
        vec![
            Faq::new("What is your return policy?", "30 days."),
            Faq::new("Do you offer international shipping?", "Yes, to 40 countries."),
            Faq::new("What payment methods do you accept?", "Cards and PayPal."),
        ]
    }

    #[test]
    fn test_exact_normalized_match() {
        let matcher = FaqMatcher::new();
        let faqs = faqs();

        let m = matcher
            .best_match(&faqs, "what is your return policy")
            .expect("should match");
        assert_eq!(m.faq.answer, "30 days.");
        assert_eq!(m.score, EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_containment_match() {
        let matcher = FaqMatcher::new();
        let faqs = faqs();

        let m = matcher
            .best_match(&faqs, "international shipping")
            .expect("should match");
        assert_eq!(m.faq.answer, "Yes, to 40 countries.");
        assert_eq!(m.score, CONTAINMENT_SCORE);

        // Reported confidence ignores the containment shortcut: 2 of 5 words
        let confidence = FaqMatcher::confidence(m.faq, "international shipping");
        assert!((confidence - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_match() {
        let matcher = FaqMatcher::new();
        let faqs = faqs();

        // {which, payment, methods, do, you, accept} vs question words: 5 of 7
        let m = matcher
            .best_match(&faqs, "which payment methods do you accept")
            .expect("should match");
        assert_eq!(m.faq.answer, "Cards and PayPal.");
        assert!((m.score - 5.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_match() {
        let matcher = FaqMatcher::new();
        let faqs = faqs();

        assert!(matcher.match_faq(&faqs, "zebra").is_none());
        assert!(matcher.match_faq(&[], "what is your return policy").is_none());
    }

    #[test]
    fn test_empty_input_is_contained_in_every_question() {
        let matcher = FaqMatcher::new();
        let faqs = faqs();

        // The empty string is a substring of anything; callers screen it out first
        let m = matcher.best_match(&faqs, "").expect("containment match");
        assert_eq!(m.faq.answer, "30 days.");
        assert_eq!(FaqMatcher::confidence(m.faq, ""), 0.0);
    }
}
