//! CLI `profile` subcommands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::SolaceConfig;
use crate::profile::{self, ProfilePatch};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the active profile
    Show,
    /// Update profile fields
    Set {
        #[arg(long)]
        display_name: Option<String>,
        /// ISO date, e.g. 1990-04-12
        #[arg(long)]
        date_of_birth: Option<String>,
        /// Something you're working toward
        #[arg(long)]
        ambition: Option<String>,
    },
}

pub fn run(config: &SolaceConfig, action: ProfileAction) -> Result<()> {
    let (conn, profile_id) = super::open(config)?;

    match action {
        ProfileAction::Show => {
            let Some(profile) = profile::get_by_name(&conn, &config.storage.default_profile)?
            else {
                anyhow::bail!("profile {} not found", config.storage.default_profile);
            };
            println!("Profile: {}", profile.name);
            println!("{}", "=".repeat(40));
            println!("  Display name:   {}", profile.display_name.as_deref().unwrap_or("-"));
            println!("  Date of birth:  {}", profile.date_of_birth.as_deref().unwrap_or("-"));
            println!("  Ambition:       {}", profile.ambition.as_deref().unwrap_or("-"));
            println!("  Created:        {}", profile.created_at);
        }
        ProfileAction::Set {
            display_name,
            date_of_birth,
            ambition,
        } => {
            if display_name.is_none() && date_of_birth.is_none() && ambition.is_none() {
                println!("Nothing to update. Pass --display-name, --date-of-birth, or --ambition.");
                return Ok(());
            }
            profile::update_profile(
                &conn,
                &profile_id,
                &ProfilePatch {
                    display_name,
                    date_of_birth,
                    ambition,
                },
            )?;
            println!("Profile updated.");
        }
    }

    Ok(())
}
