//! CLI `chat` command — one-shot message or interactive loop.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::chat::{session, store};
use crate::config::SolaceConfig;
use crate::error::StoreError;

pub fn chat(
    config: &SolaceConfig,
    session_id: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let (mut conn, profile_id) = super::open(config)?;

    let session_id = match session_id {
        Some(id) => match store::get_session(&conn, &id, &profile_id)? {
            Some(s) => s.id,
            None => {
                return Err(StoreError::NotFound {
                    kind: "chat session",
                    id,
                }
                .into())
            }
        },
        None => store::create_session(&conn, &profile_id)?.id,
    };

    if let Some(text) = message {
        let turn = session::send(
            &mut conn,
            &session_id,
            &profile_id,
            &text,
            config.chat.context_messages,
        )?;
        println!("{}", turn.reply.message);
        eprintln!("(session {session_id}, sentiment {})", turn.sentiment);
        return Ok(());
    }

    println!("Solace is listening. Type a message, or \"quit\" to leave.");
    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        let turn = session::send(
            &mut conn,
            &session_id,
            &profile_id,
            text,
            config.chat.context_messages,
        )?;
        println!("\nsolace> {}\n", turn.reply.message);
    }

    println!("Take care. This conversation is saved as session {session_id}.");
    Ok(())
}
