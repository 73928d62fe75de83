//! One conversational turn, end to end.
//!
//! [`send_message`] is the write path the callers use: persist the user
//! message with its sentiment, build a [`ChatContext`] from stored
//! history, run the response engine, and persist the assistant reply.
//! Both appends run inside a transaction.

use anyhow::Result;
use rand::Rng;
use rusqlite::Connection;

use crate::chat::store;
use crate::chat::types::Role;
use crate::engine::responder::{self, Clock, SystemClock};
use crate::engine::sentiment::{self, Sentiment};
use crate::engine::types::{ChatContext, Reply};
use crate::error::StoreError;

/// Result of one turn.
#[derive(Debug)]
pub struct ChatTurn {
    pub session_id: String,
    pub reply: Reply,
    /// Label computed for the user's message.
    pub sentiment: Sentiment,
}

/// Run one turn against an existing session.
pub fn send_message(
    conn: &mut Connection,
    session_id: &str,
    profile_id: &str,
    text: &str,
    context_messages: usize,
    rng: &mut impl Rng,
    clock: &impl Clock,
) -> Result<ChatTurn> {
    if store::get_session(conn, session_id, profile_id)?.is_none() {
        return Err(StoreError::NotFound {
            kind: "chat session",
            id: session_id.to_string(),
        }
        .into());
    }

    let prior = store::session_messages(conn, session_id)?;
    let recent_mood = crate::mood::store::recent_moods(conn, profile_id, 1)?
        .first()
        .map(|m| m.score);
    let context = build_context(&prior, context_messages, recent_mood);
    let label = sentiment::analyze(text);
    let reply = responder::reply(text, &context, rng, clock);

    let tx = conn.transaction()?;
    store::append_message(&tx, session_id, Role::User, text, Some(label))?;
    store::append_message(&tx, session_id, Role::Assistant, &reply.message, None)?;
    tx.commit()?;

    tracing::debug!(
        session = %session_id,
        turn = context.conversation_length,
        sentiment = %label,
        "chat turn stored"
    );

    Ok(ChatTurn {
        session_id: session_id.to_string(),
        reply,
        sentiment: label,
    })
}

/// [`send_message`] with the thread RNG and system clock.
pub fn send(
    conn: &mut Connection,
    session_id: &str,
    profile_id: &str,
    text: &str,
    context_messages: usize,
) -> Result<ChatTurn> {
    send_message(
        conn,
        session_id,
        profile_id,
        text,
        context_messages,
        &mut rand::rng(),
        &SystemClock,
    )
}

/// Context for the next turn: the last `context_messages` user messages,
/// a turn counter covering every stored message plus the incoming one,
/// the current wall-clock time, and the latest mood score if one exists.
fn build_context(
    prior: &[crate::chat::types::ChatMessage],
    context_messages: usize,
    recent_mood: Option<i64>,
) -> ChatContext {
    let user_messages: Vec<String> = prior
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| m.content.clone())
        .collect();
    let keep = user_messages.len().saturating_sub(context_messages);

    ChatContext {
        previous_messages: user_messages[keep..].to_vec(),
        time_of_day: chrono::Local::now().format("%H:%M:%S").to_string(),
        conversation_length: prior.len() + 1,
        recent_mood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::store::{create_session, session_messages};
    use crate::db;
    use crate::profile;
    use rand::RngCore;

    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }
        fn next_u64(&mut self) -> u64 {
            self.0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.0.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    struct FixedHour(u32);

    impl Clock for FixedHour {
        fn local_hour(&self) -> u32 {
            self.0
        }
    }

    fn test_db() -> (Connection, String) {
        let conn = db::open_memory_database().unwrap();
        let profile_id = profile::ensure_default(&conn, "default").unwrap();
        (conn, profile_id)
    }

    #[test]
    fn turn_persists_both_sides() {
        let (mut conn, pid) = test_db();
        let session = create_session(&conn, &pid).unwrap();

        let turn = send_message(
            &mut conn,
            &session.id,
            &pid,
            "I feel anxious about tomorrow",
            5,
            &mut ConstRng(0),
            &FixedHour(14),
        )
        .unwrap();

        assert_eq!(turn.sentiment, Sentiment::Negative);

        let messages = session_messages(&conn, &session.id).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].sentiment, Some(Sentiment::Negative));
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, turn.reply.message);
    }

    #[test]
    fn first_turn_gets_greeting() {
        let (mut conn, pid) = test_db();
        let session = create_session(&conn, &pid).unwrap();

        let turn = send_message(
            &mut conn,
            &session.id,
            &pid,
            "hello",
            5,
            &mut ConstRng(0),
            &FixedHour(9),
        )
        .unwrap();
        assert!(turn
            .reply
            .message
            .starts_with("Good morning! Hello! I'm here to listen and support you. "));
    }

    #[test]
    fn second_turn_has_no_greeting() {
        let (mut conn, pid) = test_db();
        let session = create_session(&conn, &pid).unwrap();

        send_message(&mut conn, &session.id, &pid, "hello", 5, &mut ConstRng(0), &FixedHour(9))
            .unwrap();
        let turn = send_message(
            &mut conn,
            &session.id,
            &pid,
            "still here",
            5,
            &mut ConstRng(0),
            &FixedHour(9),
        )
        .unwrap();
        assert!(!turn.reply.message.contains("Hello! I'm here to listen"));
    }

    #[test]
    fn context_keeps_last_n_user_messages() {
        let (mut conn, pid) = test_db();
        let session = create_session(&conn, &pid).unwrap();
        for i in 0..4 {
            send_message(
                &mut conn,
                &session.id,
                &pid,
                &format!("message {i}"),
                5,
                &mut ConstRng(0),
                &FixedHour(14),
            )
            .unwrap();
        }

        let prior = session_messages(&conn, &session.id).unwrap();
        let context = build_context(&prior, 2, Some(6));
        assert_eq!(context.previous_messages, vec!["message 2", "message 3"]);
        assert_eq!(context.recent_mood, Some(6));
        // 8 stored messages plus the incoming one
        assert_eq!(context.conversation_length, 9);
    }

    #[test]
    fn unknown_session_errors() {
        let (mut conn, pid) = test_db();
        let result = send_message(
            &mut conn,
            "nope",
            &pid,
            "hello",
            5,
            &mut ConstRng(0),
            &FixedHour(14),
        );
        assert!(result.is_err());
    }
}
