//! SQL DDL for all Solace tables.
//!
//! Defines the `profiles`, `journal_entries`, `journal_fts` (FTS5),
//! `mood_entries`, `chat_sessions`, `chat_messages`, and `schema_meta`
//! tables. All DDL uses `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements for Solace's core tables.
const SCHEMA_SQL: &str = r#"
-- Lightweight user profiles (no credentials)
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    display_name TEXT,
    date_of_birth TEXT,
    ambition TEXT,
    created_at TEXT NOT NULL
);

-- Journal entries
CREATE TABLE IF NOT EXISTS journal_entries (
    id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
    title TEXT,
    content TEXT NOT NULL,
    mood TEXT NOT NULL,
    tags TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_journal_profile ON journal_entries(profile_id);
CREATE INDEX IF NOT EXISTS idx_journal_created ON journal_entries(created_at);
CREATE INDEX IF NOT EXISTS idx_journal_mood ON journal_entries(mood);

-- Full-text search over journal title and content
CREATE VIRTUAL TABLE IF NOT EXISTS journal_fts USING fts5(
    title,
    content,
    id UNINDEXED,
    content='journal_entries',
    content_rowid='rowid'
);

-- Mood log
CREATE TABLE IF NOT EXISTS mood_entries (
    id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
    mood TEXT NOT NULL,
    score INTEGER NOT NULL CHECK(score >= 1 AND score <= 10),
    notes TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_mood_profile ON mood_entries(profile_id);
CREATE INDEX IF NOT EXISTS idx_mood_created ON mood_entries(created_at);

-- Chat conversations
CREATE TABLE IF NOT EXISTS chat_sessions (
    id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
    started_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_sessions_profile ON chat_sessions(profile_id);

-- Chat messages; sentiment is set on user rows only
CREATE TABLE IF NOT EXISTS chat_messages (
    id TEXT PRIMARY KEY,
    session_id TEXT NOT NULL REFERENCES chat_sessions(id) ON DELETE CASCADE,
    role TEXT NOT NULL CHECK(role IN ('user','assistant')),
    content TEXT NOT NULL,
    sentiment TEXT CHECK(sentiment IN ('positive','negative','neutral')),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_messages_session ON chat_messages(session_id);
CREATE INDEX IF NOT EXISTS idx_messages_created ON chat_messages(created_at);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
