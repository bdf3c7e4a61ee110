//! Turn entity - One role-tagged utterance in a session's dialog

use serde::{Deserialize, Serialize};

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Transcribed speech from the caller
    User,
    /// Reply produced by the language model (or the fallback text)
    Assistant,
}

impl TurnRole {
    /// Lowercase wire name of the role
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single utterance in a session
///
/// Turns are immutable: once created they can only be appended to a
/// session and read back, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: TurnRole,
    content: String,
}

impl Turn {
    /// Create a turn with an explicit role
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    /// Role of the speaker
    pub const fn role(&self) -> TurnRole {
        self.role
    }

    /// Text of the utterance
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this turn was spoken by the user
    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }
}
