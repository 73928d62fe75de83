//! Request-scoped input and output types for the response engine.

use serde::{Deserialize, Serialize};

/// Per-request conversational metadata used to adjust phrasing.
///
/// Built fresh from stored history for every message; never persisted.
/// The default has `conversation_length: 0`, so a caller that cannot
/// supply a turn counter gets non-first-message behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatContext {
    /// Most recent user messages, oldest first.
    pub previous_messages: Vec<String>,
    /// Wall-clock time the request was made, e.g. `"14:03:27"`.
    pub time_of_day: String,
    /// 1-based turn counter counting every stored message plus this one.
    pub conversation_length: usize,
    /// Most recent mood score, when the caller has one.
    pub recent_mood: Option<i64>,
}

impl ChatContext {
    /// Context for the opening message of a conversation.
    pub fn opening() -> Self {
        Self {
            conversation_length: 1,
            ..Self::default()
        }
    }
}

/// A generated reply. `follow_up` is also embedded in `message` after a
/// blank line when present; it is carried separately so callers can render
/// the two parts independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
}
