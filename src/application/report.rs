//! Stats card use case

use crate::domain::{Achievement, JournalStats};
use chrono::{DateTime, Duration, Utc};

/// Everything the stats command shows, evaluated at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub total_entries: usize,
    pub average_mood: f64,
    pub current_streak: u32,
    /// Entries logged in the last 7x24 hours
    pub this_week: usize,
    pub this_month: usize,
    pub achievements: Vec<Achievement>,
}

impl StatsReport {
    pub fn build(stats: &JournalStats, now: DateTime<Utc>) -> Self {
        StatsReport {
            total_entries: stats.total_entries,
            average_mood: stats.average_mood,
            current_streak: stats.current_streak,
            this_week: stats.entries_within(Duration::days(7), now),
            this_month: stats.entries_this_month(now),
            achievements: stats.achievements(now),
        }
    }
}
