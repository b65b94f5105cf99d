//! Mood journal store
//!
//! One append-only, date-ordered sequence of entries per user id, plus a
//! separately stored streak counter. Both live in the injected key-value
//! store under `moodHistory:{user}` and `moodStreak:{user}`.
//!
//! Operations for the same user must not overlap; callers serialize them.
//! Nothing here locks. Reads only ever see whole values because the store
//! replaces values atomically.

use crate::domain::keys::{history_key, streak_key};
use crate::domain::streak::advances_streak;
use crate::domain::{JournalStats, LocalZone, MoodEntry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::KeyValueStore;
use chrono::{DateTime, Utc};

pub struct MoodJournal<S: KeyValueStore> {
    store: S,
    zone: LocalZone,
}

impl<S: KeyValueStore> MoodJournal<S> {
    /// Journal judging calendar days in the machine's time zone
    pub fn new(store: S) -> Self {
        Self::with_zone(store, LocalZone::System)
    }

    pub fn with_zone(store: S, zone: impl Into<LocalZone>) -> Self {
        MoodJournal {
            store,
            zone: zone.into(),
        }
    }

    pub fn zone(&self) -> LocalZone {
        self.zone
    }

    /// Append `entry` to the user's log and update the streak counter.
    ///
    /// The log write and the counter write are two separate store writes.
    /// If the second fails, the entry stays appended and the error is
    /// returned.
    pub fn append(&self, user_id: &str, entry: MoodEntry) -> Result<Vec<MoodEntry>> {
        let mut entries = self.load_entries(user_id)?;
        let new_date = entry.date;
        entries.push(entry);

        self.save_entries(user_id, &entries)?;
        tracing::debug!(user_id = user_id, total = entries.len(), "Mood entry appended");

        self.streak_update(user_id, &entries, new_date)?;
        Ok(entries)
    }

    /// Advance the stored counter if the newest entry is on a different
    /// local day than the entry right before it.
    fn streak_update(
        &self,
        user_id: &str,
        entries: &[MoodEntry],
        new_date: DateTime<Utc>,
    ) -> Result<()> {
        let previous = entries.len().checked_sub(2).map(|i| &entries[i]);
        if !advances_streak(previous, new_date, self.zone) {
            return Ok(());
        }

        let streak = self.load_streak(user_id)?.saturating_add(1);
        self.store.set(&streak_key(user_id), &streak.to_string())?;
        tracing::debug!(user_id = user_id, streak = streak, "Streak advanced");
        Ok(())
    }

    /// Derived statistics over the stored log. No side effects.
    pub fn stats(&self, user_id: &str) -> Result<JournalStats> {
        let entries = self.load_entries(user_id)?;
        let streak = self.load_streak(user_id)?;
        Ok(JournalStats::new(entries, streak, self.zone))
    }

    /// Delete the user's log and streak counter. Absent data is a no-op.
    pub fn purge(&self, user_id: &str) -> Result<()> {
        self.store.remove(&history_key(user_id))?;
        self.store.remove(&streak_key(user_id))?;
        tracing::info!(user_id = user_id, "Journal purged");
        Ok(())
    }

    /// Load the user's sequence; unparseable data reads as empty
    fn load_entries(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        let key = history_key(user_id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    user_id = user_id,
                    key = %key,
                    error = %e,
                    "Stored mood history is malformed, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_entries(&self, user_id: &str, entries: &[MoodEntry]) -> Result<()> {
        let key = history_key(user_id);
        let raw = serde_json::to_string(entries)
            .map_err(|e| MoodlogError::persistence(&key, e))?;
        self.store.set(&key, &raw)
    }

    /// Load the user's streak counter; absent or unparseable reads as 0
    fn load_streak(&self, user_id: &str) -> Result<u32> {
        let key = streak_key(user_id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(0);
        };

        match raw.trim().parse() {
            Ok(streak) => Ok(streak),
            Err(e) => {
                tracing::warn!(
                    user_id = user_id,
                    key = %key,
                    error = %e,
                    "Stored streak is malformed, treating as 0"
                );
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use crate::infrastructure::MemoryStore;
    use chrono::{FixedOffset, TimeZone};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn journal() -> MoodJournal<MemoryStore> {
        MoodJournal::with_zone(MemoryStore::new(), utc())
    }

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_first_append_creates_log_and_streak() {
        let journal = journal();
        let entries = journal
            .append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9)))
            .unwrap();

        assert_eq!(entries.len(), 1);
        let stats = journal.stats("u1").unwrap();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_append_returns_updated_sequence_in_order() {
        let journal = journal();
        journal
            .append("u1", MoodEntry::new(Mood::Sad, 2, "a", at(1, 9)))
            .unwrap();
        let entries = journal
            .append("u1", MoodEntry::new(Mood::Happy, 4, "b", at(1, 10)))
            .unwrap();

        let notes: Vec<&str> = entries.iter().map(|e| e.notes.as_str()).collect();
        assert_eq!(notes, vec!["a", "b"]);
    }

    #[test]
    fn test_streak_ignores_gaps() {
        let journal = journal();
        journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9))).unwrap();
        journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 18))).unwrap();
        journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(3, 9))).unwrap();

        assert_eq!(journal.stats("u1").unwrap().current_streak, 2);
    }

    #[test]
    fn test_malformed_history_reads_as_empty() {
        let journal = journal();
        journal.store.set("moodHistory:u1", "{not json").unwrap();

        let stats = journal.stats("u1").unwrap();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.average_mood, 0.0);
    }

    #[test]
    fn test_append_over_malformed_history_starts_fresh() {
        let journal = journal();
        journal.store.set("moodHistory:u1", "[1, 2").unwrap();

        let entries = journal
            .append("u1", MoodEntry::new(Mood::Neutral, 3, "", at(2, 9)))
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_malformed_streak_reads_as_zero() {
        let journal = journal();
        journal.store.set("moodStreak:u1", "lots").unwrap();
        assert_eq!(journal.stats("u1").unwrap().current_streak, 0);

        journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9))).unwrap();
        assert_eq!(journal.stats("u1").unwrap().current_streak, 1);
    }

    #[test]
    fn test_streak_at_max_stays_at_max() {
        let journal = journal();
        journal.store.set("moodStreak:u1", "4294967295").unwrap();

        journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9))).unwrap();
        assert_eq!(journal.stats("u1").unwrap().current_streak, u32::MAX);
    }

    #[test]
    fn test_new_journal_uses_system_zone() {
        assert_eq!(MoodJournal::new(MemoryStore::new()).zone(), LocalZone::System);
    }

    #[test]
    fn test_purge_removes_both_keys() {
        let journal = journal();
        journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9))).unwrap();

        journal.purge("u1").unwrap();
        assert!(journal.store.is_empty());

        journal.purge("u1").unwrap();
        let stats = journal.stats("u1").unwrap();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.current_streak, 0);
    }

    /// Store whose writes fail for keys under one prefix
    struct FlakyStore {
        inner: MemoryStore,
        fail_key_prefix: &'static str,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key.starts_with(self.fail_key_prefix) {
                return Err(MoodlogError::persistence(key, "quota exceeded"));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_write_failure_surfaces_persistence_error() {
        let journal = MoodJournal::with_zone(
            FlakyStore {
                inner: MemoryStore::new(),
                fail_key_prefix: "moodHistory:",
            },
            utc(),
        );

        let result = journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9)));
        match result.unwrap_err() {
            MoodlogError::Persistence { key, message } => {
                assert_eq!(key, "moodHistory:u1");
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("Expected Persistence error, got {:?}", other),
        }
        assert_eq!(journal.stats("u1").unwrap().total_entries, 0);
    }

    #[test]
    fn test_streak_write_failure_keeps_appended_entry() {
        let journal = MoodJournal::with_zone(
            FlakyStore {
                inner: MemoryStore::new(),
                fail_key_prefix: "moodStreak:",
            },
            utc(),
        );

        let result = journal.append("u1", MoodEntry::new(Mood::Happy, 3, "", at(1, 9)));
        assert!(result.is_err());

        let stats = journal.stats("u1").unwrap();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.current_streak, 0);
    }
}
