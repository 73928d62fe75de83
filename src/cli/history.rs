//! CLI `history` command — view or clear stored conversations.

use anyhow::Result;

use crate::chat::store;
use crate::chat::types::Role;
use crate::config::SolaceConfig;
use crate::error::StoreError;

pub fn history(
    config: &SolaceConfig,
    session_id: Option<String>,
    clear: bool,
) -> Result<()> {
    let (conn, profile_id) = super::open(config)?;

    if clear {
        let removed = store::clear_history(&conn, &profile_id)?;
        println!("Cleared {removed} conversation(s).");
        return Ok(());
    }

    let session = match session_id {
        Some(id) => store::get_session(&conn, &id, &profile_id)?.ok_or(StoreError::NotFound {
            kind: "chat session",
            id,
        })?,
        None => match store::latest_session(&conn, &profile_id)? {
            Some(s) => s,
            None => {
                println!("No conversations yet. Try `solace chat`.");
                return Ok(());
            }
        },
    };

    let sessions = store::list_sessions(&conn, &profile_id)?;
    println!(
        "Session {} (started {}) — {} of {} conversation(s)",
        session.id,
        session.started_at,
        sessions.iter().position(|s| s.id == session.id).map(|i| i + 1).unwrap_or(1),
        sessions.len()
    );
    println!();

    let messages = store::session_messages(&conn, &session.id)?;
    let shown = messages.len().min(config.chat.history_page_size);
    for message in &messages[messages.len() - shown..] {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "solace",
        };
        println!("[{}] {who}:", message.created_at);
        println!("{}", message.content);
        println!();
    }

    if messages.len() > shown {
        println!("({} earlier message(s) not shown)", messages.len() - shown);
    }

    Ok(())
}
