//! Knowledge base: the intent and FAQ catalogs the matchers score against.
//!
//! The on-disk format is a single JSON document:
//!
//! ```json
//! {
//!   "intents": [
//!     { "name": "track_order",
//!       "patterns": ["track order", "where is my order"],
//!       "response": "Your order {order_id} is in transit." }
//!   ],
//!   "faqs": [
//!     { "question": "What is your return policy?", "answer": "30 days." }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Default knowledge base file name
pub const DEFAULT_KNOWLEDGE_BASE_FILE: &str = "faq_data.json";

/// A named intent with its trigger patterns and response template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent name, reported as the response label when this intent wins
    #[serde(default)]
    pub name: String,
    /// Trigger patterns, scored in order
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Response template; may contain `{key}` placeholders
    #[serde(default)]
    pub response: String,
}

impl Intent {
    pub fn new<P, S>(name: impl Into<String>, patterns: P, response: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }
}

/// A question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Intent and FAQ catalogs. Immutable once handed to a `Chatbot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub intents: Vec<Intent>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl KnowledgeBase {
    /// An empty knowledge base (no intents, no FAQs)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a knowledge base from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a knowledge base from a JSON file, surfacing any failure
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let knowledge = Self::from_json_str(&content)?;
        info!(
            "Loaded knowledge base from {:?}: {} intents, {} FAQs",
            path,
            knowledge.intent_count(),
            knowledge.faq_count()
        );
        Ok(knowledge)
    }

    /// Load a knowledge base from a JSON file, falling back to an empty one.
    ///
    /// A missing file is the normal "no catalog yet" case; any other failure is
    /// logged as a warning. Neither aborts startup.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(knowledge) => knowledge,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("Knowledge base {:?} not found, starting empty", path);
                Self::empty()
            }
            Err(e) => {
                warn!("Failed to load knowledge base {:?}: {}. Starting empty", path, e);
                Self::empty()
            }
        }
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intents.push(intent);
        self
    }

    pub fn with_faq(mut self, faq: Faq) -> Self {
        self.faqs.push(faq);
        self
    }

    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    pub fn faq_count(&self) -> usize {
        self.faqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty() && self.faqs.is_empty()
    }
}
