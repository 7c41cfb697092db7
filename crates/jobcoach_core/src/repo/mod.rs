//! Persistence contracts for profile preferences.
//!
//! # Responsibility
//! - Define the store interface injected into the salary input.
//! - Isolate SQLite query details from service orchestration.

pub mod preference_repo;
