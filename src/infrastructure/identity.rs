//! Identity boundary: who is the current user
//!
//! The journal only ever sees an opaque user id string. Resolving that id
//! happens here, once per command, before any journal operation runs.

use crate::error::{MoodlogError, Result};
use crate::infrastructure::Config;

pub const USER_ENV_VAR: &str = "MOODLOG_USER";

/// Source of the current authenticated user's id
pub trait IdentityProvider {
    fn current_user_id(&self) -> Option<String>;
}

/// A fixed id, e.g. from a command-line flag
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the id from an environment variable
#[derive(Debug, Clone)]
pub struct EnvIdentity {
    var: String,
}

impl EnvIdentity {
    pub fn new(var: impl Into<String>) -> Self {
        EnvIdentity { var: var.into() }
    }
}

impl Default for EnvIdentity {
    fn default() -> Self {
        Self::new(USER_ENV_VAR)
    }
}

impl IdentityProvider for EnvIdentity {
    fn current_user_id(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

impl IdentityProvider for Config {
    fn current_user_id(&self) -> Option<String> {
        self.user.clone()
    }
}

/// First non-empty id from `providers`, in order
pub fn resolve_user(providers: &[&dyn IdentityProvider]) -> Result<String> {
    providers
        .iter()
        .filter_map(|p| p.current_user_id())
        .find(|id| !id.trim().is_empty())
        .ok_or(MoodlogError::NoUser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_provider_wins() {
        let flag = StaticIdentity(Some("flag-user".to_string()));
        let mut config = Config::new();
        config.user = Some("config-user".to_string());

        assert_eq!(resolve_user(&[&flag, &config]).unwrap(), "flag-user");
    }

    #[test]
    fn test_falls_through_missing_and_blank() {
        let none = StaticIdentity(None);
        let blank = StaticIdentity(Some("  ".to_string()));
        let mut config = Config::new();
        config.user = Some("config-user".to_string());

        assert_eq!(
            resolve_user(&[&none, &blank, &config]).unwrap(),
            "config-user"
        );
    }

    #[test]
    fn test_no_user_anywhere() {
        let none = StaticIdentity(None);
        let env = EnvIdentity::new("MOODLOG_TEST_SURELY_UNSET_VAR");

        match resolve_user(&[&none, &env]).unwrap_err() {
            MoodlogError::NoUser => {}
            other => panic!("Expected NoUser, got {:?}", other),
        }
    }
}
