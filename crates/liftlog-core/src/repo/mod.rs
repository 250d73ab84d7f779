//! Repositories over the key-value store.
//!
//! Each repository reads its whole collection, applies one change and writes
//! the collection back. Validation happens before any write; a failed
//! operation leaves the store untouched.

mod exercises;
pub mod legacy;
mod routines;
mod sessions;

pub use exercises::ExerciseRepository;
pub use legacy::{upgrade_session, Upgraded};
pub use routines::RoutineRepository;
pub use sessions::{MigrationReport, SessionRepository};
