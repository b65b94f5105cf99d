//! Mood labels and journal entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of moods offered at check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::VerySad,
    ];

    /// Display label, also the string stored in the journal
    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
        }
    }

    /// Valence on the 1-5 scale (5 = most positive)
    pub fn value(&self) -> u8 {
        match self {
            Mood::VeryHappy => 5,
            Mood::Happy => 4,
            Mood::Neutral => 3,
            Mood::Sad => 2,
            Mood::VerySad => 1,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "veryhappy" => Ok(Mood::VeryHappy),
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "verysad" => Ok(Mood::VerySad),
            _ => Err(s.to_string()),
        }
    }
}

/// One user-reported emotional state observation.
///
/// `value` and `intensity` are expected in 1..=5. The journal trusts its
/// caller on this and does not re-check stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub value: u8,
    pub intensity: u8,
    #[serde(default)]
    pub notes: String,
    pub date: DateTime<Utc>,
}

impl MoodEntry {
    /// Build an entry from one of the check-in moods
    pub fn new(mood: Mood, intensity: u8, notes: impl Into<String>, at: DateTime<Utc>) -> Self {
        MoodEntry {
            mood: mood.label().to_string(),
            value: mood.value(),
            intensity,
            notes: notes.into(),
            date: at,
        }
    }
}
