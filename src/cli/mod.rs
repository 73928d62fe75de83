pub mod chat;
pub mod export;
pub mod history;
pub mod journal;
pub mod mood;
pub mod profile;
pub mod reset;
pub mod stats;

use anyhow::Result;
use rusqlite::Connection;

use crate::config::SolaceConfig;

/// Open the configured database and resolve the active profile id.
pub fn open(config: &SolaceConfig) -> Result<(Connection, String)> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let profile_id = crate::profile::ensure_default(&conn, &config.storage.default_profile)?;
    Ok((conn, profile_id))
}
