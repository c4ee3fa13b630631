use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use validator::Validate;

use crate::error::AppError;
use crate::knowledge::DEFAULT_KNOWLEDGE_BASE_FILE;

/// Path of the knowledge base JSON document
pub const ENV_KB_PATH: &str = "SUPPORTBOT_KB_PATH";
/// Seed for greeting/fallback phrase selection
pub const ENV_SEED: &str = "SUPPORTBOT_SEED";
/// User id for single-user front ends
pub const ENV_USER_ID: &str = "SUPPORTBOT_USER_ID";

/// Runtime configuration for a chatbot front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatbotConfig {
    /// Location of the knowledge base. A missing file means an empty catalog.
    #[validate(length(min = 1))]
    pub knowledge_base_path: String,
    /// Fixed seed for reproducible phrasing; entropy-seeded when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// User id a single-user front end reports messages under. A fresh
    /// `user_<uuid>` is generated per session when absent.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub user_id: Option<String>,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            knowledge_base_path: DEFAULT_KNOWLEDGE_BASE_FILE.to_string(),
            rng_seed: None,
            user_id: None,
        }
    }
}

impl ChatbotConfig {
    /// Read configuration from the environment, loading a `.env` file first
    /// if one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        // Optional: a missing .env is not an error
        let _ = dotenv::dotenv();
        Self::from_current_env()
    }

    /// Read configuration from the process environment only
    pub fn from_current_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(path) = env::var(ENV_KB_PATH) {
            config.knowledge_base_path = path;
        }

        if let Ok(seed) = env::var(ENV_SEED) {
            let seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::Config(format!("{} must be an integer: {}", ENV_SEED, e)))?;
            config.rng_seed = Some(seed);
        }

        if let Ok(user_id) = env::var(ENV_USER_ID) {
            config.user_id = Some(user_id);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply explicit values (command-line flags) over the loaded settings
    pub fn with_overrides(
        mut self,
        knowledge_base_path: Option<String>,
        rng_seed: Option<u64>,
        user_id: Option<String>,
    ) -> Result<Self, AppError> {
        if let Some(path) = knowledge_base_path {
            self.knowledge_base_path = path;
        }
        if rng_seed.is_some() {
            self.rng_seed = rng_seed;
        }
        if user_id.is_some() {
            self.user_id = user_id;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn knowledge_base_path(&self) -> &Path {
        Path::new(&self.knowledge_base_path)
    }

    /// The configured user id, or a fresh `user_<uuid>` for this session
    pub fn session_user_id(&self) -> String {
        self.user_id
            .clone()
            .unwrap_or_else(|| format!("user_{}", uuid::Uuid::new_v4().simple()))
    }
}
