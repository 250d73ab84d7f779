//! # Liftlog Core
//!
//! Core library for Liftlog - a local, single-user workout tracker.
//!
//! This crate provides the data model, the repositories over a key-value JSON
//! store, and the derivation logic (volume, progress, set defaults, session
//! construction) independent of any user interface.
//!
//! ## Architecture
//!
//! - **storage**: Key-value store trait, in-memory and JSON-file backends
//! - **types**: Exercises, routines, sessions and their creation/patch inputs
//! - **repo**: Exercise, routine and session repositories (validation, legacy upgrade)
//! - **logic**: Pure derivations over repository output
//! - **seed**: One-time sample data
//!
//! Reads flow store -> repository (upgrade) -> logic -> caller. Writes flow
//! caller -> repository (validate) -> store.

pub mod clock;
pub mod error;
pub mod fs;
pub mod logic;
pub mod repo;
pub mod seed;
pub mod storage;
pub mod tracker;
pub mod types;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use error::{LiftlogError, Result, ValidationError};
pub use storage::{CollectionKeys, InMemoryStore, JsonFileStore, KeyValueStore};
pub use tracker::Tracker;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
