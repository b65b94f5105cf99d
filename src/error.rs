//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodlogError {
    /// Reading or writing the persistence substrate failed
    #[error("Persistence error on '{key}': {message}")]
    Persistence { key: String, message: String },

    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("No user id available")]
    NoUser,

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    pub fn persistence(key: &str, err: impl std::fmt::Display) -> Self {
        MoodlogError::Persistence {
            key: key.to_string(),
            message: err.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidMood(_) => 3,
            MoodlogError::NoUser => 4,
            MoodlogError::Persistence { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidMood(label) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods:\n\
                    • very-happy, happy, neutral, sad, very-sad\n\n\
                    Examples:\n\
                    moodlog log happy\n\
                    moodlog log very-sad -i 4 -n \"rough day\"",
                    label
                )
            }
            MoodlogError::NoUser => "No user id available\n\n\
                Suggestions:\n\
                • Pass --user <ID> on the command line\n\
                • Set MOODLOG_USER environment variable\n\
                • Configure a default: moodlog config user <ID>"
                .to_string(),
            MoodlogError::Persistence { key, message } => {
                format!(
                    "Could not access stored data for '{}': {}\n\n\
                    Suggestions:\n\
                    • Check free disk space and permissions on .moodlog/store\n\
                    • Retry the command; nothing was retried automatically",
                    key, message
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
