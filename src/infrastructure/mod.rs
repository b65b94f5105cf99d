//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod identity;
pub mod repository;
pub mod store;
pub mod suggestion;

pub use config::Config;
pub use identity::{resolve_user, EnvIdentity, IdentityProvider, StaticIdentity};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use suggestion::{suggestion_or_fallback, HttpSuggestionClient, SuggestionSource};
