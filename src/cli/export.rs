//! CLI `export` command — dump all data as JSON to stdout.

use anyhow::Result;
use serde::Serialize;

use crate::chat::types::{ChatMessage, ChatSession};
use crate::config::SolaceConfig;
use crate::journal::types::JournalEntry;
use crate::mood::types::MoodEntry;
use crate::profile::Profile;

/// Export format — wraps every record the active profile owns.
#[derive(Debug, Serialize)]
struct ExportData {
    profile: Profile,
    journal_entries: Vec<JournalEntry>,
    mood_entries: Vec<MoodEntry>,
    chat_sessions: Vec<ChatSession>,
    chat_messages: Vec<ChatMessage>,
}

/// Export the active profile's data as JSON to stdout.
pub fn export(config: &SolaceConfig) -> Result<()> {
    let (conn, profile_id) = super::open(config)?;

    let Some(profile) = crate::profile::get_by_name(&conn, &config.storage.default_profile)?
    else {
        anyhow::bail!("profile {} not found", config.storage.default_profile);
    };

    let journal_entries = crate::journal::store::list_entries(&conn, &profile_id)?;
    let mood_entries = crate::mood::store::list_moods(&conn, &profile_id)?;
    let chat_sessions = crate::chat::store::list_sessions(&conn, &profile_id)?;

    let mut chat_messages = Vec::new();
    for session in &chat_sessions {
        chat_messages.extend(crate::chat::store::session_messages(&conn, &session.id)?);
    }

    let data = ExportData {
        profile,
        journal_entries,
        mood_entries,
        chat_sessions,
        chat_messages,
    };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} journal entries, {} moods, and {} chat messages.",
        data.journal_entries.len(),
        data.mood_entries.len(),
        data.chat_messages.len()
    );

    Ok(())
}
