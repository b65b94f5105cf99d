//! Derived statistics over a user's journal

use crate::domain::{LocalZone, MoodEntry};
use chrono::{DateTime, Datelike, Duration, Utc};

/// Window used by the trend chart
pub const TREND_WINDOW: usize = 7;

/// Window used by the "recent entries" list
pub const RECENT_ENTRIES: usize = 5;

/// Statistics recomputed from the stored sequence on every query.
///
/// Never persisted. `current_streak` is the stored counter, read back as is.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalStats {
    pub total_entries: usize,
    /// Mean of `value`, rounded to one decimal; 0 for an empty journal
    pub average_mood: f64,
    pub current_streak: u32,
    entries: Vec<MoodEntry>,
    zone: LocalZone,
}

/// A single point on the mood trend chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Short weekday name in local time, e.g. "Mon"
    pub day: String,
    pub value: u8,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

impl JournalStats {
    pub fn new(entries: Vec<MoodEntry>, current_streak: u32, zone: impl Into<LocalZone>) -> Self {
        JournalStats {
            total_entries: entries.len(),
            average_mood: average_mood(&entries),
            current_streak,
            entries,
            zone: zone.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full sequence in chronological order
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The last `n` entries in chronological order
    pub fn recent_window(&self, n: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Count of entries logged less than `window` before `now`.
    ///
    /// This is an instant-difference filter, unrelated to `recent_window`.
    pub fn entries_within(&self, window: Duration, now: DateTime<Utc>) -> usize {
        self.entries
            .iter()
            .filter(|e| now.signed_duration_since(e.date) < window)
            .count()
    }

    /// Count of entries in the local calendar month (and year) of `now`
    pub fn entries_this_month(&self, now: DateTime<Utc>) -> usize {
        let today = self.zone.day_of(now);
        self.entries
            .iter()
            .map(|e| self.zone.day_of(e.date))
            .filter(|d| d.year() == today.year() && d.month() == today.month())
            .count()
    }

    /// Chart points for the last `n` entries, oldest first
    pub fn trend_points(&self, n: usize) -> Vec<TrendPoint> {
        self.recent_window(n)
            .iter()
            .map(|e| TrendPoint {
                day: self.zone.format(e.date, "%a").to_string(),
                value: e.value,
                date: e.date,
            })
            .collect()
    }

    /// The last `n` entries, newest first
    pub fn recent_entries(&self, n: usize) -> Vec<&MoodEntry> {
        self.recent_window(n).iter().rev().collect()
    }

    pub fn achievements(&self, now: DateTime<Utc>) -> Vec<Achievement> {
        vec![
            Achievement {
                title: "First Steps",
                description: "Completed your first mood entry",
                earned: self.total_entries > 0,
            },
            Achievement {
                title: "Consistent Tracker",
                description: "Logged mood for 7 days in a row",
                earned: self.current_streak >= 7,
            },
            Achievement {
                title: "Monthly Warrior",
                description: "Logged mood 20 times this month",
                earned: self.entries_this_month(now) >= 20,
            },
        ]
    }
}

fn average_mood(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u64 = entries.iter().map(|e| u64::from(e.value)).sum();
    let mean = sum as f64 / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}
