//! Chat persistence — sessions, message append, history reads.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::chat::types::{ChatMessage, ChatSession, Role};
use crate::engine::sentiment::Sentiment;

/// Start a new conversation for a profile.
pub fn create_session(conn: &Connection, profile_id: &str) -> Result<ChatSession> {
    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO chat_sessions (id, profile_id, started_at) VALUES (?1, ?2, ?3)",
        params![id, profile_id, now],
    )?;
    tracing::debug!(session = %id, "chat session started");

    Ok(ChatSession {
        id,
        profile_id: profile_id.to_string(),
        started_at: now,
    })
}

/// Fetch a session, scoped to the owning profile.
pub fn get_session(
    conn: &Connection,
    session_id: &str,
    profile_id: &str,
) -> Result<Option<ChatSession>> {
    let session = conn
        .query_row(
            "SELECT id, profile_id, started_at FROM chat_sessions \
             WHERE id = ?1 AND profile_id = ?2",
            params![session_id, profile_id],
            session_from_row,
        )
        .optional()?;
    Ok(session)
}

/// All of a profile's sessions, newest first.
pub fn list_sessions(conn: &Connection, profile_id: &str) -> Result<Vec<ChatSession>> {
    let mut stmt = conn.prepare(
        "SELECT id, profile_id, started_at FROM chat_sessions \
         WHERE profile_id = ?1 ORDER BY started_at DESC",
    )?;
    let sessions = stmt
        .query_map(params![profile_id], session_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sessions)
}

/// The most recently started session, if any.
pub fn latest_session(conn: &Connection, profile_id: &str) -> Result<Option<ChatSession>> {
    let session = conn
        .query_row(
            "SELECT id, profile_id, started_at FROM chat_sessions \
             WHERE profile_id = ?1 ORDER BY started_at DESC LIMIT 1",
            params![profile_id],
            session_from_row,
        )
        .optional()?;
    Ok(session)
}

/// Append one message to a session.
pub fn append_message(
    conn: &Connection,
    session_id: &str,
    role: Role,
    content: &str,
    sentiment: Option<Sentiment>,
) -> Result<ChatMessage> {
    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO chat_messages (id, session_id, role, content, sentiment, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id,
            session_id,
            role.as_str(),
            content,
            sentiment.map(|s| s.as_str()),
            now
        ],
    )?;

    Ok(ChatMessage {
        id,
        session_id: session_id.to_string(),
        role,
        content: content.to_string(),
        sentiment,
        created_at: now,
    })
}

/// A session's messages, oldest first.
pub fn session_messages(conn: &Connection, session_id: &str) -> Result<Vec<ChatMessage>> {
    let mut stmt = conn.prepare(
        "SELECT id, session_id, role, content, sentiment, created_at \
         FROM chat_messages WHERE session_id = ?1 ORDER BY created_at ASC",
    )?;
    let messages = stmt
        .query_map(params![session_id], message_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(messages)
}

/// Number of stored messages in a session (both roles).
pub fn count_messages(conn: &Connection, session_id: &str) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM chat_messages WHERE session_id = ?1",
        params![session_id],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// Delete all of a profile's sessions; messages cascade. Returns the
/// number of sessions removed.
pub fn clear_history(conn: &Connection, profile_id: &str) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM chat_sessions WHERE profile_id = ?1",
        params![profile_id],
    )?;
    tracing::info!(sessions = removed, "chat history cleared");
    Ok(removed)
}

fn session_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChatSession> {
    Ok(ChatSession {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        started_at: row.get(2)?,
    })
}

fn message_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChatMessage> {
    let role: String = row.get(2)?;
    let sentiment: Option<String> = row.get(4)?;
    Ok(ChatMessage {
        id: row.get(0)?,
        session_id: row.get(1)?,
        role: role.parse().map_err(|_| rusqlite::Error::InvalidQuery)?,
        content: row.get(3)?,
        sentiment: sentiment.and_then(|s| s.parse().ok()),
        created_at: row.get(5)?,
    })
}
