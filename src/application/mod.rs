//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod mood_journal;
pub mod record_mood;
pub mod report;

pub use manage_config::ConfigService;
pub use mood_journal::MoodJournal;
pub use record_mood::{RecordMoodService, RecordOutcome};
pub use report::StatsReport;
