//! Streak counter rule
//!
//! The counter advances whenever a new entry lands on a different local
//! calendar day than the entry logged just before it. Days are not checked
//! for being consecutive, so a gap of several days still advances the
//! counter instead of resetting it.

use crate::domain::{LocalZone, MoodEntry};
use chrono::{DateTime, Utc};

/// Whether appending an entry at `new_date` after `previous` advances the streak
pub fn advances_streak(
    previous: Option<&MoodEntry>,
    new_date: DateTime<Utc>,
    zone: LocalZone,
) -> bool {
    match previous {
        None => true,
        Some(prev) => zone.day_of(prev.date) != zone.day_of(new_date),
    }
}
