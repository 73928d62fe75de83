//! Journal write and read path.
//!
//! Writes run inside a transaction and keep the external-content FTS5
//! index (`journal_fts`) in sync: inserts add a row with the same rowid,
//! updates and deletes first issue the FTS 'delete' command with the old
//! column values.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::error::StoreError;
use crate::journal::types::{EntryPatch, JournalEntry, NewEntry};

/// Insert a new journal entry and index it for search.
pub fn create_entry(
    conn: &mut Connection,
    profile_id: &str,
    entry: &NewEntry,
) -> Result<JournalEntry> {
    let tx = conn.transaction()?;

    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let tags_json = serde_json::to_string(&entry.tags)?;

    tx.execute(
        "INSERT INTO journal_entries (id, profile_id, title, content, mood, tags, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![id, profile_id, entry.title, entry.content, entry.mood, tags_json, now],
    )?;
    let rowid = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO journal_fts (rowid, title, content, id) VALUES (?1, ?2, ?3, ?4)",
        params![rowid, entry.title, entry.content, id],
    )?;

    tx.commit()?;
    tracing::debug!(entry = %id, "journal entry created");

    Ok(JournalEntry {
        id,
        profile_id: profile_id.to_string(),
        title: entry.title.clone(),
        content: entry.content.clone(),
        mood: entry.mood.clone(),
        tags: entry.tags.clone(),
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Fetch one entry, scoped to the owning profile.
pub fn get_entry(conn: &Connection, id: &str, profile_id: &str) -> Result<Option<JournalEntry>> {
    let entry = conn
        .query_row(
            "SELECT id, profile_id, title, content, mood, tags, created_at, updated_at \
             FROM journal_entries WHERE id = ?1 AND profile_id = ?2",
            params![id, profile_id],
            entry_from_row,
        )
        .optional()?;
    Ok(entry)
}

/// All of a profile's entries, newest first.
pub fn list_entries(conn: &Connection, profile_id: &str) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, profile_id, title, content, mood, tags, created_at, updated_at \
         FROM journal_entries WHERE profile_id = ?1 ORDER BY created_at DESC",
    )?;
    let entries = stmt
        .query_map(params![profile_id], entry_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Apply non-`None` patch fields, bump `updated_at`, and resync the FTS row.
pub fn update_entry(
    conn: &mut Connection,
    id: &str,
    profile_id: &str,
    patch: &EntryPatch,
) -> Result<JournalEntry> {
    let tx = conn.transaction()?;

    let old = fetch_indexed(&tx, id, profile_id)?.ok_or_else(|| StoreError::NotFound {
        kind: "journal entry",
        id: id.to_string(),
    })?;

    let now = chrono::Utc::now().to_rfc3339();
    let tags_json = patch
        .tags
        .as_ref()
        .map(|t| serde_json::to_string(t))
        .transpose()?;

    tx.execute(
        "UPDATE journal_entries SET \
           title = COALESCE(?1, title), \
           content = COALESCE(?2, content), \
           mood = COALESCE(?3, mood), \
           tags = COALESCE(?4, tags), \
           updated_at = ?5 \
         WHERE id = ?6",
        params![patch.title, patch.content, patch.mood, tags_json, now, id],
    )?;

    // Resync FTS: drop the old row, index the new values
    tx.execute(
        "INSERT INTO journal_fts (journal_fts, rowid, title, content, id) \
         VALUES ('delete', ?1, ?2, ?3, ?4)",
        params![old.rowid, old.title, old.content, id],
    )?;
    let (new_title, new_content): (Option<String>, String) = tx.query_row(
        "SELECT title, content FROM journal_entries WHERE id = ?1",
        params![id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    tx.execute(
        "INSERT INTO journal_fts (rowid, title, content, id) VALUES (?1, ?2, ?3, ?4)",
        params![old.rowid, new_title, new_content, id],
    )?;

    tx.commit()?;

    get_entry(conn, id, profile_id)?.ok_or_else(|| {
        StoreError::NotFound {
            kind: "journal entry",
            id: id.to_string(),
        }
        .into()
    })
}

/// Delete an entry and its FTS row. Returns `false` when no such entry.
pub fn delete_entry(conn: &mut Connection, id: &str, profile_id: &str) -> Result<bool> {
    let tx = conn.transaction()?;

    let Some(old) = fetch_indexed(&tx, id, profile_id)? else {
        return Ok(false);
    };

    tx.execute(
        "INSERT INTO journal_fts (journal_fts, rowid, title, content, id) \
         VALUES ('delete', ?1, ?2, ?3, ?4)",
        params![old.rowid, old.title, old.content, id],
    )?;
    tx.execute("DELETE FROM journal_entries WHERE id = ?1", params![id])?;

    tx.commit()?;
    tracing::debug!(entry = %id, "journal entry deleted");
    Ok(true)
}

/// The indexed columns of an existing row, needed for FTS resync.
struct IndexedRow {
    rowid: i64,
    title: Option<String>,
    content: String,
}

fn fetch_indexed(tx: &Transaction, id: &str, profile_id: &str) -> Result<Option<IndexedRow>> {
    let row = tx
        .query_row(
            "SELECT rowid, title, content FROM journal_entries \
             WHERE id = ?1 AND profile_id = ?2",
            params![id, profile_id],
            |row| {
                Ok(IndexedRow {
                    rowid: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

pub(crate) fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<JournalEntry> {
    let tags_json: Option<String> = row.get(5)?;
    Ok(JournalEntry {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        mood: row.get(4)?,
        tags: tags_json
            .and_then(|t| serde_json::from_str(&t).ok())
            .unwrap_or_default(),
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::profile;

    fn test_db() -> (Connection, String) {
        let conn = db::open_memory_database().unwrap();
        let profile_id = profile::ensure_default(&conn, "default").unwrap();
        (conn, profile_id)
    }

    fn entry(content: &str) -> NewEntry {
        NewEntry {
            title: None,
            content: content.to_string(),
            mood: "neutral".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn create_and_get() {
        let (mut conn, pid) = test_db();
        let created = create_entry(
            &mut conn,
            &pid,
            &NewEntry {
                title: Some("Morning pages".into()),
                content: "Slept well, feeling rested".into(),
                mood: "calm".into(),
                tags: vec!["sleep".into(), "routine".into()],
            },
        )
        .unwrap();

        let fetched = get_entry(&conn, &created.id, &pid).unwrap().unwrap();
        assert_eq!(fetched.title.as_deref(), Some("Morning pages"));
        assert_eq!(fetched.mood, "calm");
        assert_eq!(fetched.tags, vec!["sleep", "routine"]);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn get_is_profile_scoped() {
        let (mut conn, pid) = test_db();
        let other = profile::ensure_default(&conn, "other").unwrap();
        let created = create_entry(&mut conn, &pid, &entry("private thoughts")).unwrap();

        assert!(get_entry(&conn, &created.id, &other).unwrap().is_none());
    }

    #[test]
    fn list_newest_first() {
        let (mut conn, pid) = test_db();
        let first = create_entry(&mut conn, &pid, &entry("first")).unwrap();
        // Force a distinct timestamp ordering via direct update
        conn.execute(
            "UPDATE journal_entries SET created_at = '2026-01-01T00:00:00Z' WHERE id = ?1",
            params![first.id],
        )
        .unwrap();
        let second = create_entry(&mut conn, &pid, &entry("second")).unwrap();

        let entries = list_entries(&conn, &pid).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
    }

    #[test]
    fn create_indexes_for_search() {
        let (mut conn, pid) = test_db();
        create_entry(&mut conn, &pid, &entry("the quiet morning walk")).unwrap();

        let hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM journal_fts WHERE journal_fts MATCH 'quiet'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(hits, 1);
    }

    #[test]
    fn update_patches_and_resyncs_fts() {
        let (mut conn, pid) = test_db();
        let created = create_entry(&mut conn, &pid, &entry("draft about gardens")).unwrap();

        let updated = update_entry(
            &mut conn,
            &created.id,
            &pid,
            &EntryPatch {
                content: Some("final text about oceans".into()),
                mood: Some("calm".into()),
                ..EntryPatch::default()
            },
        )
        .unwrap();
        assert_eq!(updated.content, "final text about oceans");
        assert_eq!(updated.mood, "calm");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let old_hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM journal_fts WHERE journal_fts MATCH 'gardens'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(old_hits, 0, "old content must leave the index");

        let new_hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM journal_fts WHERE journal_fts MATCH 'oceans'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(new_hits, 1);
    }

    #[test]
    fn update_missing_entry_errors() {
        let (mut conn, pid) = test_db();
        let result = update_entry(&mut conn, "nope", &pid, &EntryPatch::default());
        assert!(result.is_err());
    }

    #[test]
    fn delete_removes_row_and_index() {
        let (mut conn, pid) = test_db();
        let created = create_entry(&mut conn, &pid, &entry("about lighthouses")).unwrap();

        assert!(delete_entry(&mut conn, &created.id, &pid).unwrap());
        assert!(get_entry(&conn, &created.id, &pid).unwrap().is_none());

        let hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM journal_fts WHERE journal_fts MATCH 'lighthouses'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(hits, 0);
    }

    #[test]
    fn delete_missing_returns_false() {
        let (mut conn, pid) = test_db();
        assert!(!delete_entry(&mut conn, "nope", &pid).unwrap());
    }

    #[test]
    fn delete_is_profile_scoped() {
        let (mut conn, pid) = test_db();
        let other = profile::ensure_default(&conn, "other").unwrap();
        let created = create_entry(&mut conn, &pid, &entry("mine")).unwrap();

        assert!(!delete_entry(&mut conn, &created.id, &other).unwrap());
        assert!(get_entry(&conn, &created.id, &pid).unwrap().is_some());
    }
}
