//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SUGGESTION_URL: &str = "http://127.0.0.1:5001/checkin";
pub const DEFAULT_SUGGESTION_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default user id when neither --user nor MOODLOG_USER is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default = "default_suggestions")]
    pub suggestions: bool,
    #[serde(default = "default_suggestion_url")]
    pub suggestion_url: String,
    #[serde(default = "default_suggestion_timeout_secs")]
    pub suggestion_timeout_secs: u64,
    pub created: DateTime<Utc>,
}

fn default_suggestions() -> bool {
    true
}

fn default_suggestion_url() -> String {
    DEFAULT_SUGGESTION_URL.to_string()
}

fn default_suggestion_timeout_secs() -> u64 {
    DEFAULT_SUGGESTION_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            user: None,
            suggestions: default_suggestions(),
            suggestion_url: default_suggestion_url(),
            suggestion_timeout_secs: default_suggestion_timeout_secs(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
