//! Chatbot engine: the entry point front ends call.
//!
//! One `Chatbot` serves every user of a process. Construct it once and share
//! it by reference (or `Arc`); all operations take `&self`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, instrument};

use crate::brain::text::is_blank;
use crate::brain::{MatchResult, ResponseResolver};
use crate::config::ChatbotConfig;
use crate::conversation::{ConversationRecord, ConversationStore, UserContextStore, DEFAULT_USER_ID};
use crate::knowledge::KnowledgeBase;

/// Rule-based customer support responder
pub struct Chatbot {
    knowledge: KnowledgeBase,
    resolver: ResponseResolver,
    history: ConversationStore,
    contexts: UserContextStore,
    rng: Mutex<StdRng>,
}

impl Chatbot {
    /// Create an engine over `knowledge` with an entropy-seeded random source
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self::with_rng(knowledge, StdRng::from_entropy())
    }

    /// Create an engine whose greeting/fallback choices are reproducible
    pub fn seeded(knowledge: KnowledgeBase, seed: u64) -> Self {
        Self::with_rng(knowledge, StdRng::seed_from_u64(seed))
    }

    /// Create an engine with an explicit random source
    pub fn with_rng(knowledge: KnowledgeBase, rng: StdRng) -> Self {
        info!(
            "Chatbot ready: {} intents, {} FAQs",
            knowledge.intent_count(),
            knowledge.faq_count()
        );
        Self {
            knowledge,
            resolver: ResponseResolver::new(),
            history: ConversationStore::new(),
            contexts: UserContextStore::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Load the knowledge base file, starting empty if it can't be read
    pub fn from_path(path: &Path) -> Self {
        Self::new(KnowledgeBase::load_or_default(path))
    }

    /// Build an engine from configuration
    pub fn from_config(config: &ChatbotConfig) -> Self {
        let knowledge = KnowledgeBase::load_or_default(config.knowledge_base_path());
        match config.rng_seed {
            Some(seed) => Self::seeded(knowledge, seed),
            None => Self::new(knowledge),
        }
    }

    /// Replace the resolver (custom phrasings or keyword lists)
    pub fn with_resolver(mut self, resolver: ResponseResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Process a user message and return the response.
    ///
    /// Empty or whitespace-only input gets a prompt back and is not recorded.
    #[instrument(skip(self, text))]
    pub fn process(&self, text: &str, user_id: &str) -> MatchResult {
        if is_blank(text) {
            return self.resolver.empty_prompt();
        }

        self.history.append(ConversationRecord::new(user_id, text));

        let context = self.contexts.snapshot(user_id);
        let result = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.resolver.resolve(&self.knowledge, text, context.as_ref(), &mut *rng)
        };

        debug!("Processed message: {}", result.summary());
        result
    }

    /// Process a message from the default user
    pub fn process_default(&self, text: &str) -> MatchResult {
        self.process(text, DEFAULT_USER_ID)
    }

    /// Messages received from `user_id`, oldest first
    pub fn history(&self, user_id: &str) -> Vec<ConversationRecord> {
        self.history.history(user_id)
    }

    /// Forget every message from `user_id`
    pub fn clear(&self, user_id: &str) {
        let removed = self.history.clear(user_id);
        debug!(user_id, removed, "Cleared conversation history");
    }

    /// Set a context value used to fill `{key}` placeholders for `user_id`
    pub fn set_context(&self, user_id: &str, key: impl Into<String>, value: impl Into<String>) {
        self.contexts.set(user_id, key, value);
    }

    /// Remove a context value; returns what was stored
    pub fn unset_context(&self, user_id: &str, key: &str) -> Option<String> {
        self.contexts.remove(user_id, key)
    }

    /// Snapshot of the context stored for `user_id`
    pub fn context(&self, user_id: &str) -> HashMap<String, String> {
        self.contexts.snapshot(user_id).unwrap_or_default()
    }
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new(KnowledgeBase::empty())
    }
}
