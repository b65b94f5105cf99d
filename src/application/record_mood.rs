//! Record mood use case

use crate::application::MoodJournal;
use crate::domain::{Mood, MoodEntry};
use crate::error::Result;
use crate::infrastructure::{suggestion_or_fallback, KeyValueStore, SuggestionSource};
use chrono::{DateTime, Utc};

/// What a successful check-in produced
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub entry: MoodEntry,
    pub total_entries: usize,
    /// Present whenever a suggestion source was configured
    pub suggestion: Option<String>,
}

/// Service for appending a check-in and fetching a follow-up tip
pub struct RecordMoodService<'a, S: KeyValueStore> {
    journal: &'a MoodJournal<S>,
    suggestions: Option<&'a dyn SuggestionSource>,
}

impl<'a, S: KeyValueStore> RecordMoodService<'a, S> {
    pub fn new(journal: &'a MoodJournal<S>) -> Self {
        RecordMoodService {
            journal,
            suggestions: None,
        }
    }

    pub fn with_suggestions(mut self, source: &'a dyn SuggestionSource) -> Self {
        self.suggestions = Some(source);
        self
    }

    /// Append the entry, then ask for a suggestion.
    ///
    /// `intensity` must already be in 1..=5. The suggestion is requested only
    /// after the append is stored, and its failure yields the fallback text.
    pub fn execute(
        &self,
        user_id: &str,
        mood: Mood,
        intensity: u8,
        notes: &str,
        now: DateTime<Utc>,
    ) -> Result<RecordOutcome> {
        let entry = MoodEntry::new(mood, intensity, notes, now);
        let entries = self.journal.append(user_id, entry.clone())?;

        let suggestion = self
            .suggestions
            .map(|source| suggestion_or_fallback(source, mood.label()));

        Ok(RecordOutcome {
            entry,
            total_entries: entries.len(),
            suggestion,
        })
    }
}
