//! Chat record types.

use serde::{Deserialize, Serialize};

use crate::engine::sentiment::Sentiment;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// One conversation, matching the `chat_sessions` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    pub profile_id: String,
    /// RFC 3339 timestamp of the first message.
    pub started_at: String,
}

/// One stored message, matching the `chat_messages` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub role: Role,
    pub content: String,
    /// Set on user rows only; the label computed for that message.
    pub sentiment: Option<Sentiment>,
    pub created_at: String,
}
