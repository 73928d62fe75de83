//! Mood statistics — average score, total entries, and day streak.

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{params, Connection};
use serde::Serialize;

/// Response from mood_stats.
#[derive(Debug, Serialize)]
pub struct MoodStats {
    /// Mean score rounded to one decimal; 0.0 with no entries.
    pub average_score: f64,
    /// Consecutive calendar days with at least one entry, ending today.
    pub streak: u32,
    pub total_entries: u64,
}

/// Compute a profile's mood statistics.
pub fn mood_stats(conn: &Connection, profile_id: &str) -> Result<MoodStats> {
    let (total, average): (i64, Option<f64>) = conn.query_row(
        "SELECT COUNT(*), AVG(score) FROM mood_entries WHERE profile_id = ?1",
        params![profile_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    if total == 0 {
        return Ok(MoodStats {
            average_score: 0.0,
            streak: 0,
            total_entries: 0,
        });
    }

    let mut stmt = conn.prepare(
        "SELECT created_at FROM mood_entries WHERE profile_id = ?1 ORDER BY created_at DESC",
    )?;
    let timestamps: Vec<String> = stmt
        .query_map(params![profile_id], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MoodStats {
        average_score: round_one_decimal(average.unwrap_or(0.0)),
        streak: day_streak(&timestamps, Local::now().date_naive()),
        total_entries: total as u64,
    })
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count consecutive local calendar days with activity, ending today.
///
/// `timestamps` must be RFC 3339 and sorted newest first. Multiple entries
/// on the same day collapse to one; a day gap or no entry today ends the
/// walk immediately.
pub(crate) fn day_streak(timestamps: &[String], today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = timestamps
        .iter()
        .filter_map(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .collect();
    days.dedup();

    let mut streak: u32 = 0;
    for day in days {
        let diff = (today - day).num_days();
        if diff == streak as i64 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
