use chrono::Utc;
use clap::Parser;
use moodlog::application::{init::init, ConfigService, MoodJournal, RecordMoodService, StatsReport};
use moodlog::cli::{format_entry, format_history, format_stats, format_trend, Cli, Commands};
use moodlog::domain::{Mood, TREND_WINDOW};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{
    resolve_user, Config, EnvIdentity, FileStore, FileSystemRepository, HttpSuggestionClient,
    JournalRepository, StaticIdentity,
};
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MOODLOG_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodlog workspace at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("user = {}", config.user.unwrap_or_default());
                println!("suggestions = {}", config.suggestions);
                println!("suggestion_url = {}", config.suggestion_url);
                println!("suggestion_timeout_secs = {}", config.suggestion_timeout_secs);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: user, suggestions, suggestion_url, suggestion_timeout_secs, created"
                );
                Ok(())
            }
        }
        Commands::Log {
            mood,
            intensity,
            notes,
            no_suggest,
        } => {
            let mood = Mood::from_str(&mood).map_err(MoodlogError::InvalidMood)?;
            let session = Session::open(cli.user)?;
            let client = HttpSuggestionClient::new(
                session.config.suggestion_url.clone(),
                Duration::from_secs(session.config.suggestion_timeout_secs),
            );

            let mut service = RecordMoodService::new(&session.journal);
            if session.config.suggestions && !no_suggest {
                service = service.with_suggestions(&client);
            }

            let outcome = service.execute(&session.user_id, mood, intensity, &notes, Utc::now())?;
            print!("{}", format_entry(&outcome.entry, session.journal.zone()));
            println!("Saved entry #{}", outcome.total_entries);
            if let Some(tip) = outcome.suggestion {
                println!();
                println!("{}", tip);
            }
            Ok(())
        }
        Commands::Stats => {
            let session = Session::open(cli.user)?;
            let stats = session.journal.stats(&session.user_id)?;
            print!("{}", format_stats(&StatsReport::build(&stats, Utc::now())));
            Ok(())
        }
        Commands::History { limit } => {
            let session = Session::open(cli.user)?;
            let stats = session.journal.stats(&session.user_id)?;
            let history = format_history(&stats.recent_entries(limit), session.journal.zone());
            println!("{}", history.trim_end());
            Ok(())
        }
        Commands::Trend => {
            let session = Session::open(cli.user)?;
            let stats = session.journal.stats(&session.user_id)?;
            println!("{}", format_trend(&stats.trend_points(TREND_WINDOW)).trim_end());
            Ok(())
        }
        Commands::Purge { yes } => {
            let session = Session::open(cli.user)?;
            if !yes {
                return Err(MoodlogError::Config(format!(
                    "Refusing to purge journal for '{}' without --yes",
                    session.user_id
                )));
            }
            session.journal.purge(&session.user_id)?;
            println!("Purged journal for {}", session.user_id);
            Ok(())
        }
    }
}

/// Workspace, config, resolved user and journal for one command
struct Session {
    config: Config,
    user_id: String,
    journal: MoodJournal<FileStore>,
}

impl Session {
    fn open(user_flag: Option<String>) -> Result<Self, MoodlogError> {
        let repo = FileSystemRepository::discover()?;
        let config = repo.load_config()?;
        let user_id = resolve_user(&[
            &StaticIdentity(user_flag),
            &EnvIdentity::default(),
            &config,
        ])?;

        Ok(Session {
            journal: MoodJournal::new(repo.store()),
            config,
            user_id,
        })
    }
}
