//! Greeting and farewell detection.
//!
//! Plain keyword checks over normalized text. Short messages (three words or
//! fewer) are treated as greetings whenever a greeting keyword appears anywhere
//! in them; longer messages must open with the greeting.

use super::text::{normalize, words};

/// Default greeting keywords
pub const GREETING_KEYWORDS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
    "sup",
    "what's up",
];

/// Default farewell keywords
pub const GOODBYE_KEYWORDS: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "farewell",
    "exit",
    "quit",
    "thanks",
    "thank you",
    "done",
];

/// Messages with at most this many words use the loose greeting check
const SHORT_MESSAGE_WORDS: usize = 3;

/// Keyword-based greeting/farewell detector
#[derive(Debug, Clone)]
pub struct SmallTalkDetector {
    greetings: Vec<String>,
    goodbyes: Vec<String>,
}

impl Default for SmallTalkDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SmallTalkDetector {
    /// Create a detector with the default keyword lists
    pub fn new() -> Self {
        Self::with_keywords(GREETING_KEYWORDS, GOODBYE_KEYWORDS)
    }

    /// Create a detector with custom keyword lists
    pub fn with_keywords<S: AsRef<str>>(greetings: &[S], goodbyes: &[S]) -> Self {
        Self {
            greetings: greetings.iter().map(|k| k.as_ref().to_string()).collect(),
            goodbyes: goodbyes.iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }

    /// Check if the text is a greeting
    pub fn is_greeting(&self, text: &str) -> bool {
        let normalized = normalize(text);
        let message_words: Vec<&str> = words(&normalized).collect();

        if message_words.len() <= SHORT_MESSAGE_WORDS {
            return self
                .greetings
                .iter()
                .any(|keyword| normalized.contains(keyword.as_str()));
        }

        self.greetings.iter().any(|keyword| keyword == message_words[0])
            || self
                .greetings
                .iter()
                .any(|keyword| normalized.contains(&format!("{} ", keyword)))
    }

    /// Check if the text is a farewell
    pub fn is_goodbye(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.goodbyes
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}
