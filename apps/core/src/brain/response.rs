//! Match Result - Output structure of the response resolver.

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Which rule produced a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseLabel {
    /// Farewell keyword detected
    Goodbye,
    /// Answer taken from the FAQ catalog
    Faq,
    /// Greeting keyword detected
    Greeting,
    /// Nothing matched
    Fallback,
    /// A named intent from the knowledge base
    Intent(String),
}

impl ResponseLabel {
    /// Returns the label as reported to front ends
    pub fn as_str(&self) -> &str {
        match self {
            ResponseLabel::Goodbye => "goodbye",
            ResponseLabel::Faq => "faq",
            ResponseLabel::Greeting => "greeting",
            ResponseLabel::Fallback => "fallback",
            ResponseLabel::Intent(name) => name,
        }
    }
}

impl fmt::Display for ResponseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ResponseLabel {
    fn from(label: &str) -> Self {
        match label {
            "goodbye" => ResponseLabel::Goodbye,
            "faq" => ResponseLabel::Faq,
            "greeting" => ResponseLabel::Greeting,
            "fallback" => ResponseLabel::Fallback,
            name => ResponseLabel::Intent(name.to_string()),
        }
    }
}

impl Serialize for ResponseLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResponseLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ResponseLabel::from(label.as_str()))
    }
}

/// Result of processing one user message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Text to show the user
    pub response: String,
    /// Rule or intent that produced the response; `None` for empty input
    pub intent: Option<ResponseLabel>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// When the response was produced
    pub timestamp: DateTime<Utc>,
}

impl MatchResult {
    /// Build a result stamped with the current time
    pub fn new(response: impl Into<String>, intent: Option<ResponseLabel>, confidence: f32) -> Self {
        Self {
            response: response.into(),
            intent,
            confidence: confidence.clamp(0.0, 1.0),
            timestamp: Utc::now(),
        }
    }

    /// Label as a plain string, if any
    pub fn label(&self) -> Option<&str> {
        self.intent.as_ref().map(ResponseLabel::as_str)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "intent: {}, confidence: {:.2}",
            self.label().unwrap_or("none"),
            self.confidence
        )
    }
}

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid regex: placeholder pattern")
});

/// Replace `{key}` placeholders with values from `context`.
///
/// Placeholders without a value are left in the text as written.
pub fn fill_placeholders(template: &str, context: Option<&HashMap<String, String>>) -> String {
    let Some(context) = context else {
        return template.to_string();
    };

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match context.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
