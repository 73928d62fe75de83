//! Profile bootstrap and updates.
//!
//! Every record in Solace hangs off a profile row. There are no
//! credentials; a profile is just a name plus a few optional personal
//! fields the user may fill in.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub ambition: Option<String>,
    pub created_at: String,
}

/// Optional field updates; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub display_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub ambition: Option<String>,
}

/// Fetch the profile named `name`, creating it if missing. Returns its id.
pub fn ensure_default(conn: &Connection, name: &str) -> Result<String> {
    if let Some(profile) = get_by_name(conn, name)? {
        return Ok(profile.id);
    }

    let id = uuid::Uuid::now_v7().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO profiles (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![id, name, now],
    )?;
    tracing::info!(profile = name, "created profile");
    Ok(id)
}

/// Look up a profile by its unique name.
pub fn get_by_name(conn: &Connection, name: &str) -> Result<Option<Profile>> {
    let profile = conn
        .query_row(
            "SELECT id, name, display_name, date_of_birth, ambition, created_at \
             FROM profiles WHERE name = ?1",
            params![name],
            profile_from_row,
        )
        .optional()?;
    Ok(profile)
}

/// Apply non-`None` patch fields to the profile with the given id.
pub fn update_profile(conn: &Connection, id: &str, patch: &ProfilePatch) -> Result<Profile> {
    conn.execute(
        "UPDATE profiles SET \
           display_name = COALESCE(?1, display_name), \
           date_of_birth = COALESCE(?2, date_of_birth), \
           ambition = COALESCE(?3, ambition) \
         WHERE id = ?4",
        params![patch.display_name, patch.date_of_birth, patch.ambition, id],
    )?;

    conn.query_row(
        "SELECT id, name, display_name, date_of_birth, ambition, created_at \
         FROM profiles WHERE id = ?1",
        params![id],
        profile_from_row,
    )
    .optional()?
    .ok_or_else(|| {
        StoreError::NotFound {
            kind: "profile",
            id: id.to_string(),
        }
        .into()
    })
}

fn profile_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        name: row.get(1)?,
        display_name: row.get(2)?,
        date_of_birth: row.get(3)?,
        ambition: row.get(4)?,
        created_at: row.get(5)?,
    })
}
