//! Record types held by the sentence store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simplification difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimplificationLevel {
    /// Short words, short clauses
    Easy,
    /// Balanced rewording
    #[default]
    Medium,
    /// Light rewording only
    Hard,
}

impl SimplificationLevel {
    /// Get the canonical name for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            SimplificationLevel::Easy => "easy",
            SimplificationLevel::Medium => "medium",
            SimplificationLevel::Hard => "hard",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<SimplificationLevel> {
        match s.to_lowercase().as_str() {
            "easy" | "simple" | "beginner" => Some(SimplificationLevel::Easy),
            "medium" | "default" | "intermediate" => Some(SimplificationLevel::Medium),
            "hard" | "advanced" => Some(SimplificationLevel::Hard),
            _ => None,
        }
    }
}

/// Stored user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Stored sentence record: a complex sentence and its simplification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    pub id: u64,
    pub complex_sentence: String,
    pub simplified_sentence: String,
    pub level: SimplificationLevel,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a sentence
#[derive(Debug, Clone, Deserialize)]
pub struct NewSentence {
    pub complex_sentence: String,
    pub simplified_sentence: String,
    pub level: SimplificationLevel,
}
