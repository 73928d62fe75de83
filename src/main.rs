mod chat;
mod cli;
mod config;
mod db;
mod engine;
mod error;
mod journal;
mod mood;
mod profile;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "solace", version, about = "Mental-wellness companion — journal, moods, and a supportive chat")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Talk with the companion (interactive unless --message is given)
    Chat {
        /// Continue an existing session instead of starting a new one
        #[arg(long)]
        session: Option<String>,
        /// Send a single message and print the reply
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Write and search journal entries
    Journal {
        #[command(subcommand)]
        action: cli::journal::JournalAction,
    },
    /// Log moods and view statistics
    Mood {
        #[command(subcommand)]
        action: cli::mood::MoodAction,
    },
    /// Show or update the active profile
    Profile {
        #[command(subcommand)]
        action: cli::profile::ProfileAction,
    },
    /// Show or clear chat history
    History {
        /// A specific session (defaults to the most recent)
        #[arg(long)]
        session: Option<String>,
        /// Delete all chat history
        #[arg(long)]
        clear: bool,
    },
    /// Dashboard overview
    Stats,
    /// Export all data as JSON to stdout
    Export,
    /// Delete all data after confirmation
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::SolaceConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for command output.
    let filter = EnvFilter::try_new(&config.app.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Chat { session, message } => cli::chat::chat(&config, session, message)?,
        Command::Journal { action } => cli::journal::run(&config, action)?,
        Command::Mood { action } => cli::mood::run(&config, action)?,
        Command::Profile { action } => cli::profile::run(&config, action)?,
        Command::History { session, clear } => cli::history::history(&config, session, clear)?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Export => cli::export::export(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}
