//! CLI `stats` command — dashboard overview in the terminal.

use anyhow::Result;

use crate::config::SolaceConfig;

pub fn stats(config: &SolaceConfig) -> Result<()> {
    let (conn, profile_id) = super::open(config)?;

    let response = crate::stats::overview(&conn, &profile_id)?;

    println!("Solace Overview");
    println!("{}", "=".repeat(40));
    println!("  Journal entries:   {}", response.total_journal_entries);
    println!("  Journal streak:    {} day(s)", response.journal_streak);
    println!("  Chats this month:  {}", response.chats_this_month);
    println!("  Average mood:      {:.1}", response.average_mood);

    if !response.recent_entries.is_empty() {
        println!();
        println!("Recent entries:");
        for entry in &response.recent_entries {
            let title = entry.title.as_deref().unwrap_or("(untitled)");
            println!("  {}  [{}]  {}", entry.created_at, entry.mood, title);
            println!("      {}", entry.preview);
        }
    }

    Ok(())
}
