//! Journal search — FTS5 match plus post-filters.
//!
//! A text query runs through the `journal_fts` index ranked by relevance;
//! an empty query starts from the full entry list. Mood, tag, and date
//! filters are applied to the candidates afterwards.

use anyhow::Result;
use chrono::{DateTime, Local, Months, NaiveDate};
use rusqlite::{params, Connection};

use crate::journal::store::entry_from_row;
use crate::journal::types::JournalEntry;

/// Relative date window measured back from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Today,
    Week,
    Month,
    Year,
}

impl std::str::FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("unknown date range: {s}")),
        }
    }
}

/// Filters applied after the FTS match.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub mood: Option<String>,
    /// Entry must carry at least one of these tags. Empty = no tag filter.
    pub tags: Vec<String>,
    pub date_range: Option<DateRange>,
}

/// Search a profile's journal.
///
/// `query` matches title and content via FTS5; empty or punctuation-only
/// queries skip the text match and apply filters to every entry.
pub fn search_entries(
    conn: &Connection,
    profile_id: &str,
    query: &str,
    filter: &SearchFilter,
    limit: usize,
) -> Result<Vec<JournalEntry>> {
    let fts_query = sanitize_query(query);

    let candidates = match fts_query {
        Some(q) => fts_candidates(conn, profile_id, &q)?,
        None => crate::journal::store::list_entries(conn, profile_id)?,
    };

    let now = Local::now();
    let results: Vec<JournalEntry> = candidates
        .into_iter()
        .filter(|entry| matches_filter(entry, filter, &now))
        .take(limit)
        .collect();

    Ok(results)
}

/// Reduce user input to quoted alphanumeric tokens so punctuation can't be
/// parsed as FTS5 query syntax. Returns `None` when nothing searchable
/// remains.
fn sanitize_query(query: &str) -> Option<String> {
    let cleaned: String = query
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let quoted: Vec<String> = cleaned
        .split_whitespace()
        .map(|token| format!("\"{token}\""))
        .collect();

    if quoted.is_empty() {
        None
    } else {
        Some(quoted.join(" "))
    }
}

fn fts_candidates(
    conn: &Connection,
    profile_id: &str,
    fts_query: &str,
) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT e.id, e.profile_id, e.title, e.content, e.mood, e.tags, e.created_at, e.updated_at \
         FROM journal_entries e \
         JOIN journal_fts ON journal_fts.rowid = e.rowid \
         WHERE journal_fts MATCH ?1 AND e.profile_id = ?2 \
         ORDER BY journal_fts.rank",
    )?;
    let entries = stmt
        .query_map(params![fts_query, profile_id], entry_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

fn matches_filter(entry: &JournalEntry, filter: &SearchFilter, now: &DateTime<Local>) -> bool {
    if let Some(ref mood) = filter.mood {
        if &entry.mood != mood {
            return false;
        }
    }

    if !filter.tags.is_empty() && !filter.tags.iter().any(|t| entry.tags.contains(t)) {
        return false;
    }

    if let Some(range) = filter.date_range {
        let Some(created) = parse_local(&entry.created_at) else {
            return false;
        };
        if !in_range(created, range, now) {
            return false;
        }
    }

    true
}

fn parse_local(timestamp: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

fn in_range(created: DateTime<Local>, range: DateRange, now: &DateTime<Local>) -> bool {
    let today = now.date_naive();
    match range {
        DateRange::Today => created.date_naive() == today,
        DateRange::Week => created >= *now - chrono::Duration::days(7),
        DateRange::Month => created.date_naive() >= month_back(today, 1),
        DateRange::Year => created.date_naive() >= month_back(today, 12),
    }
}

fn month_back(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(months))
        .unwrap_or(today)
}
