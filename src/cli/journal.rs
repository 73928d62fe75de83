//! CLI `journal` subcommands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::SolaceConfig;
use crate::journal::search::{DateRange, SearchFilter};
use crate::journal::store;
use crate::journal::types::{EntryPatch, JournalEntry, NewEntry};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a new entry
    Add {
        /// Entry text
        content: String,
        #[arg(short, long)]
        title: Option<String>,
        /// Mood word for this entry
        #[arg(short, long, default_value = "neutral")]
        mood: String,
        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// List all entries, newest first
    List,
    /// Show one entry in full
    Show { id: String },
    /// Update fields of an entry
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
        #[arg(short, long)]
        mood: Option<String>,
        /// Comma-separated tags (replaces the stored set)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
    /// Delete an entry
    Delete { id: String },
    /// Full-text search with optional filters
    Search {
        /// Query text; empty matches everything
        #[arg(default_value = "")]
        query: String,
        #[arg(short, long)]
        mood: Option<String>,
        /// Match entries carrying any of these tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// One of: today, week, month, year
        #[arg(long)]
        range: Option<String>,
    },
}

pub fn run(config: &SolaceConfig, action: JournalAction) -> Result<()> {
    let (mut conn, profile_id) = super::open(config)?;

    match action {
        JournalAction::Add {
            content,
            title,
            mood,
            tags,
        } => {
            let entry = store::create_entry(
                &mut conn,
                &profile_id,
                &NewEntry {
                    title,
                    content,
                    mood,
                    tags,
                },
            )?;
            println!("Saved entry {}.", entry.id);
        }
        JournalAction::List => {
            let entries = store::list_entries(&conn, &profile_id)?;
            if entries.is_empty() {
                println!("No journal entries yet. Try `solace journal add`.");
                return Ok(());
            }
            for entry in &entries {
                print_line(entry);
            }
        }
        JournalAction::Show { id } => match store::get_entry(&conn, &id, &profile_id)? {
            Some(entry) => print_full(&entry),
            None => println!("No entry with id {id}."),
        },
        JournalAction::Edit {
            id,
            title,
            content,
            mood,
            tags,
        } => {
            let entry = store::update_entry(
                &mut conn,
                &id,
                &profile_id,
                &EntryPatch {
                    title,
                    content,
                    mood,
                    tags,
                },
            )?;
            println!("Updated entry {}.", entry.id);
        }
        JournalAction::Delete { id } => {
            if store::delete_entry(&mut conn, &id, &profile_id)? {
                println!("Deleted entry {id}.");
            } else {
                println!("No entry with id {id}.");
            }
        }
        JournalAction::Search {
            query,
            mood,
            tags,
            range,
        } => {
            let date_range = range
                .map(|r| r.parse::<DateRange>())
                .transpose()
                .map_err(anyhow::Error::msg)?;
            let filter = SearchFilter {
                mood,
                tags,
                date_range,
            };
            let results = crate::journal::search::search_entries(
                &conn,
                &profile_id,
                &query,
                &filter,
                config.journal.search_limit,
            )?;
            if results.is_empty() {
                println!("No matching entries.");
                return Ok(());
            }
            for entry in &results {
                print_line(entry);
            }
        }
    }

    Ok(())
}

fn print_line(entry: &JournalEntry) {
    let title = entry.title.as_deref().unwrap_or("(untitled)");
    println!(
        "{}  {}  [{}]  {}",
        entry.created_at, entry.id, entry.mood, title
    );
}

fn print_full(entry: &JournalEntry) {
    if let Some(ref title) = entry.title {
        println!("{title}");
        println!("{}", "=".repeat(title.len()));
    }
    println!("{}", entry.content);
    println!();
    println!("mood:    {}", entry.mood);
    if !entry.tags.is_empty() {
        println!("tags:    {}", entry.tags.join(", "));
    }
    println!("created: {}", entry.created_at);
    if entry.updated_at != entry.created_at {
        println!("updated: {}", entry.updated_at);
    }
}
