//! CLI `reset` command — delete all data after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::SolaceConfig;

/// Delete all profiles, entries, moods, and conversations after confirmation.
pub fn reset(config: &SolaceConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL journal entries, moods, and chat history.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let conn = crate::db::open_database(&db_path)?;

    // Drop all data — order matters for FK constraints; the external-content
    // FTS index only accepts the special 'delete-all' command
    conn.execute_batch(
        "DELETE FROM chat_messages;
         DELETE FROM chat_sessions;
         DELETE FROM mood_entries;
         INSERT INTO journal_fts(journal_fts) VALUES('delete-all');
         DELETE FROM journal_entries;
         DELETE FROM profiles;",
    )?;

    println!("All data deleted. Database reset complete.");
    Ok(())
}
