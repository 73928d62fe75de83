//! CLI `mood` subcommands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::SolaceConfig;
use crate::mood::{stats, store};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record how you're feeling right now
    Log {
        /// Mood word, e.g. "good", "low", "struggling"
        mood: String,
        /// Intensity from 1 (lowest) to 10 (highest)
        score: i64,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List all check-ins, newest first
    List,
    /// Average, streak, and totals
    Stats,
}

pub fn run(config: &SolaceConfig, action: MoodAction) -> Result<()> {
    let (conn, profile_id) = super::open(config)?;

    match action {
        MoodAction::Log { mood, score, notes } => {
            let entry = store::log_mood(&conn, &profile_id, &mood, score, notes.as_deref())?;
            println!("Logged \"{}\" ({}/10).", entry.mood, entry.score);
        }
        MoodAction::List => {
            let entries = store::list_moods(&conn, &profile_id)?;
            if entries.is_empty() {
                println!("No mood check-ins yet. Try `solace mood log good 7`.");
                return Ok(());
            }
            for entry in &entries {
                let notes = entry.notes.as_deref().unwrap_or("");
                println!(
                    "{}  {:>2}/10  {:<12} {}",
                    entry.created_at, entry.score, entry.mood, notes
                );
            }
        }
        MoodAction::Stats => {
            let response = stats::mood_stats(&conn, &profile_id)?;
            println!("Mood Statistics");
            println!("{}", "=".repeat(40));
            println!("  Check-ins:      {}", response.total_entries);
            println!("  Average score:  {:.1}", response.average_score);
            println!("  Day streak:     {}", response.streak);
        }
    }

    Ok(())
}
