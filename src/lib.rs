//! moodlog - Local mood journal
//!
//! Records mood check-ins per user in an append-only log kept in a local
//! key-value store, and derives streak, average and trend statistics from it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::MoodJournal;
pub use error::MoodlogError;
