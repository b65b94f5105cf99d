//! Domain layer - Mood entries and derived statistics

pub mod keys;
pub mod mood;
pub mod stats;
pub mod streak;
pub mod zone;

pub use mood::{Mood, MoodEntry};
pub use stats::{Achievement, JournalStats, TrendPoint, RECENT_ENTRIES, TREND_WINDOW};
pub use zone::LocalZone;
