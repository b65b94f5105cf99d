//! CLI command definitions

use crate::domain::RECENT_ENTRIES;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Local mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// User id (overrides MOODLOG_USER and the configured default)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new moodlog workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record how you feel right now
    Log {
        /// Mood (very-happy, happy, neutral, sad, very-sad)
        mood: String,

        /// How intense the feeling is, 1-5
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        intensity: u8,

        /// Optional notes
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Skip asking the suggestion endpoint for a tip
        #[arg(long)]
        no_suggest: bool,
    },

    /// Show totals, average, streak and achievements
    Stats,

    /// Show the most recent entries, newest first
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = RECENT_ENTRIES)]
        limit: usize,
    },

    /// Chart the last 7 entries
    Trend,

    /// Delete every entry and the streak for the user
    Purge {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
