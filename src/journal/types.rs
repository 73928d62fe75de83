//! Journal record types.

use serde::{Deserialize, Serialize};

/// A journal entry, matching the `journal_entries` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    pub profile_id: String,
    pub title: Option<String>,
    pub content: String,
    /// Free-form mood word chosen at write time (e.g. `"calm"`).
    pub mood: String,
    pub tags: Vec<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-modification timestamp.
    pub updated_at: String,
}

/// Fields for a new entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: Option<String>,
    pub content: String,
    pub mood: String,
    pub tags: Vec<String>,
}

/// Optional field updates; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<String>,
    pub tags: Option<Vec<String>>,
}
