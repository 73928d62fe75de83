//! Mood log record types.

use serde::{Deserialize, Serialize};

/// A mood check-in, matching the `mood_entries` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    pub profile_id: String,
    /// Mood word (e.g. `"great"`, `"struggling"`).
    pub mood: String,
    /// Intensity score in `1..=10`.
    pub score: i64,
    pub notes: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}
