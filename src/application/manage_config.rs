//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const VALID_KEYS: &str = "user, suggestions, suggestion_url, suggestion_timeout_secs, created";
const WRITABLE_KEYS: &str = "user, suggestions, suggestion_url, suggestion_timeout_secs";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "user" => Ok(config.user.unwrap_or_default()),
            "suggestions" => Ok(config.suggestions.to_string()),
            "suggestion_url" => Ok(config.suggestion_url),
            "suggestion_timeout_secs" => Ok(config.suggestion_timeout_secs.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "user" => {
                config.user = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "suggestions" => {
                config.suggestions = value.parse().map_err(|_| {
                    MoodlogError::Config(format!(
                        "Invalid value for suggestions: '{}' (expected true or false)",
                        value
                    ))
                })?;
            }
            "suggestion_url" => {
                config.suggestion_url = value.to_string();
            }
            "suggestion_timeout_secs" => {
                config.suggestion_timeout_secs = value.parse().map_err(|_| {
                    MoodlogError::Config(format!(
                        "Invalid value for suggestion_timeout_secs: '{}' (expected whole seconds)",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, WRITABLE_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
