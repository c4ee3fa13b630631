//! # Brain Module
//!
//! Rule-based matching for SupportBot. No ML model: every decision is a
//! keyword check or a word-overlap score over normalized text.
//!
//! ## Components
//! - `text`: normalization and tokenization
//! - `similarity`: Jaccard word-overlap score
//! - `smalltalk`: greeting and farewell detection
//! - `intent`: intent catalog matching
//! - `faq`: FAQ catalog matching
//! - `response`: output data structure and placeholder filling
//! - `resolver`: main orchestrator (precedence rules)

pub mod faq;
pub mod intent;
pub mod resolver;
pub mod response;
pub mod similarity;
pub mod smalltalk;
pub mod text;

// Re-export main types for convenience
pub use faq::{FaqMatch, FaqMatcher};
pub use intent::{IntentMatch, IntentMatcher};
pub use resolver::{ResponsePhrases, ResponseResolver};
pub use response::{fill_placeholders, MatchResult, ResponseLabel};
pub use similarity::similarity;
pub use smalltalk::SmallTalkDetector;
pub use text::normalize;
