//! Dashboard overview — the cross-module numbers shown by `solace stats`.

use anyhow::Result;
use chrono::{DateTime, Datelike, Local};
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::journal;
use crate::mood;

const PREVIEW_CHARS: usize = 80;

/// Aggregated dashboard numbers for one profile.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    /// Consecutive days with a journal entry, ending today.
    pub journal_streak: u32,
    pub total_journal_entries: u64,
    /// Conversational turns this month. Messages are stored in user /
    /// assistant pairs, so this is the stored count halved.
    pub chats_this_month: u64,
    pub average_mood: f64,
    pub recent_entries: Vec<EntryPreview>,
}

/// Compact journal entry summary for the dashboard.
#[derive(Debug, Serialize)]
pub struct EntryPreview {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub mood: String,
    pub preview: String,
    pub created_at: String,
}

/// Compute the dashboard overview.
pub fn overview(conn: &Connection, profile_id: &str) -> Result<DashboardStats> {
    let entries = journal::store::list_entries(conn, profile_id)?;
    let mood_stats = mood::stats::mood_stats(conn, profile_id)?;

    let journal_timestamps: Vec<String> =
        entries.iter().map(|e| e.created_at.clone()).collect();
    let journal_streak =
        mood::stats::day_streak(&journal_timestamps, Local::now().date_naive());

    let recent_entries = entries
        .iter()
        .take(3)
        .map(|e| EntryPreview {
            id: e.id.clone(),
            title: e.title.clone(),
            mood: e.mood.clone(),
            preview: truncate(&e.content, PREVIEW_CHARS),
            created_at: e.created_at.clone(),
        })
        .collect();

    Ok(DashboardStats {
        journal_streak,
        total_journal_entries: entries.len() as u64,
        chats_this_month: chat_messages_this_month(conn, profile_id)? / 2,
        average_mood: mood_stats.average_score,
        recent_entries,
    })
}

/// Stored chat messages (both roles) created in the current local month.
fn chat_messages_this_month(conn: &Connection, profile_id: &str) -> Result<u64> {
    let mut stmt = conn.prepare(
        "SELECT m.created_at FROM chat_messages m \
         JOIN chat_sessions s ON s.id = m.session_id \
         WHERE s.profile_id = ?1",
    )?;
    let timestamps: Vec<String> = stmt
        .query_map(params![profile_id], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    let now = Local::now();
    let count = timestamps
        .iter()
        .filter_map(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|dt| dt.with_timezone(&Local))
        .filter(|dt| dt.year() == now.year() && dt.month() == now.month())
        .count();
    Ok(count as u64)
}

fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{cut}...")
}
