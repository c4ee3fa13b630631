//! In-memory conversation log and per-user context.
//!
//! Both stores are shared by every user of a `Chatbot`, so each sits behind an
//! `RwLock`: one writer at a time, readers get a consistent snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default user identifier for single-user front ends
pub const DEFAULT_USER_ID: &str = "default";

/// One user message as received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Sender of the message
    pub user_id: String,
    /// Raw message text
    pub user_message: String,
    /// When the message was received
    pub timestamp: DateTime<Utc>,
}

impl ConversationRecord {
    /// Create a record stamped with the current time
    pub fn new(user_id: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_message: user_message.into(),
            timestamp: Utc::now(),
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Append-only message log shared by all users
#[derive(Debug, Default)]
pub struct ConversationStore {
    records: RwLock<Vec<ConversationRecord>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn append(&self, record: ConversationRecord) {
        write(&self.records).push(record);
    }

    /// All records of `user_id`, oldest first
    pub fn history(&self, user_id: &str) -> Vec<ConversationRecord> {
        read(&self.records)
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Remove every record of `user_id`; other users are untouched.
    ///
    /// Returns the number of records removed.
    pub fn clear(&self, user_id: &str) -> usize {
        let mut records = write(&self.records);
        let before = records.len();
        records.retain(|record| record.user_id != user_id);
        before - records.len()
    }
}

/// Per-user key/value context (e.g. `order_id`), written by front ends
#[derive(Debug, Default)]
pub struct UserContextStore {
    contexts: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl UserContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` for `user_id`, creating the user's context on first use
    pub fn set(&self, user_id: &str, key: impl Into<String>, value: impl Into<String>) {
        write(&self.contexts)
            .entry(user_id.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Snapshot of a user's context
    pub fn snapshot(&self, user_id: &str) -> Option<HashMap<String, String>> {
        read(&self.contexts).get(user_id).cloned()
    }

    /// Remove one key; returns the previous value
    pub fn remove(&self, user_id: &str, key: &str) -> Option<String> {
        write(&self.contexts)
            .get_mut(user_id)
            .and_then(|context| context.remove(key))
    }
}
