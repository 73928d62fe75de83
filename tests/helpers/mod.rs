#![allow(dead_code)]

use rand::RngCore;
use rusqlite::Connection;
use solace::db;
use solace::engine::responder::Clock;

/// Open a fresh in-memory database with schema and migrations applied,
/// plus a bootstrapped default profile. Returns the connection and the
/// profile id.
pub fn test_db() -> (Connection, String) {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    let profile_id = solace::profile::ensure_default(&conn, "default").unwrap();
    (conn, profile_id)
}

/// RNG that returns the same word forever.
///
/// `ConstRng(0)` makes every uniform draw 0.0 (suppressing probabilistic
/// follow-ups); `ConstRng(u64::MAX)` makes draws just under 1.0 (forcing
/// them).
pub struct ConstRng(pub u64);

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

/// Clock pinned to a fixed local hour.
pub struct FixedHour(pub u32);

impl Clock for FixedHour {
    fn local_hour(&self) -> u32 {
        self.0
    }
}

/// Insert a journal entry with the given content. Returns its id.
pub fn insert_entry(conn: &mut Connection, profile_id: &str, content: &str) -> String {
    solace::journal::store::create_entry(
        conn,
        profile_id,
        &solace::journal::types::NewEntry {
            title: None,
            content: content.to_string(),
            mood: "neutral".to_string(),
            tags: vec![],
        },
    )
    .unwrap()
    .id
}
