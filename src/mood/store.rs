//! Mood log write and read path.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::mood::types::MoodEntry;

/// Record a mood check-in. `score` must be in `1..=10`.
pub fn log_mood(
    conn: &Connection,
    profile_id: &str,
    mood: &str,
    score: i64,
    notes: Option<&str>,
) -> Result<MoodEntry> {
    if !(1..=10).contains(&score) {
        return Err(StoreError::InvalidScore(score).into());
    }

    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO mood_entries (id, profile_id, mood, score, notes, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![id, profile_id, mood, score, notes, now],
    )?;
    tracing::debug!(mood, score, "mood logged");

    Ok(MoodEntry {
        id,
        profile_id: profile_id.to_string(),
        mood: mood.to_string(),
        score,
        notes: notes.map(|n| n.to_string()),
        created_at: now,
    })
}

/// All of a profile's mood entries, newest first.
pub fn list_moods(conn: &Connection, profile_id: &str) -> Result<Vec<MoodEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, profile_id, mood, score, notes, created_at \
         FROM mood_entries WHERE profile_id = ?1 ORDER BY created_at DESC",
    )?;
    let entries = stmt
        .query_map(params![profile_id], mood_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// The most recent `limit` entries, newest first.
pub fn recent_moods(conn: &Connection, profile_id: &str, limit: usize) -> Result<Vec<MoodEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, profile_id, mood, score, notes, created_at \
         FROM mood_entries WHERE profile_id = ?1 ORDER BY created_at DESC LIMIT ?2",
    )?;
    let entries = stmt
        .query_map(params![profile_id, limit as i64], mood_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

fn mood_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MoodEntry> {
    Ok(MoodEntry {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        mood: row.get(2)?,
        score: row.get(3)?,
        notes: row.get(4)?,
        created_at: row.get(5)?,
    })
}
