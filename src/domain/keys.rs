//! Storage key naming for per-user journal state

const HISTORY_PREFIX: &str = "moodHistory:";
const STREAK_PREFIX: &str = "moodStreak:";

/// Key holding the serialized entry sequence for a user
pub fn history_key(user_id: &str) -> String {
    format!("{}{}", HISTORY_PREFIX, user_id)
}

/// Key holding the serialized streak counter for a user
pub fn streak_key(user_id: &str) -> String {
    format!("{}{}", STREAK_PREFIX, user_id)
}
