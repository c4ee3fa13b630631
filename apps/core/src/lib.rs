//! SupportBot core: a rule-based customer support responder.
//!
//! Free-text input is classified as a farewell, an FAQ question, a catalog
//! intent, a greeting, or none of these, and answered with a canned response
//! and a confidence score.
//!
//! ```rust,ignore
//! use supportbot_core::{Chatbot, KnowledgeBase};
//!
//! let bot = Chatbot::new(KnowledgeBase::load_or_default("faq_data.json".as_ref()));
//! bot.set_context("u1", "order_id", "X123");
//! let reply = bot.process("where is my order", "u1");
//! println!("{} ({:?}, {:.2})", reply.response, reply.label(), reply.confidence);
//! ```

pub mod brain;
pub mod chatbot;
pub mod config;
pub mod conversation;
pub mod error;
pub mod knowledge;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{MatchResult, ResponseLabel};
pub use chatbot::Chatbot;
pub use config::ChatbotConfig;
pub use conversation::{ConversationRecord, DEFAULT_USER_ID};
pub use error::AppError;
pub use knowledge::{Faq, Intent, KnowledgeBase};
