//! Entry point tying a store, its key namespace and a clock together.

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::repo::{ExerciseRepository, RoutineRepository, SessionRepository};
use crate::storage::{CollectionKeys, KeyValueStore};

/// Owns the store and hands out repositories borrowing it.
///
/// ```
/// use liftlog_core::types::NewExercise;
/// use liftlog_core::{InMemoryStore, Tracker};
///
/// let tracker = Tracker::new(InMemoryStore::new());
/// tracker.exercises().add(NewExercise::new("Bench Press")).unwrap();
/// assert_eq!(tracker.exercises().list().unwrap().len(), 1);
/// ```
pub struct Tracker<S: KeyValueStore> {
    store: S,
    keys: CollectionKeys,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Tracker over `store` using the default namespace and the system clock.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, CollectionKeys::default())
    }

    pub fn with_namespace(store: S, namespace: &str) -> Self {
        Self::with_keys(store, CollectionKeys::new(namespace))
    }

    pub fn with_keys(store: S, keys: CollectionKeys) -> Self {
        Self {
            store,
            keys,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &CollectionKeys {
        &self.keys
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn exercises(&self) -> ExerciseRepository<'_, S> {
        ExerciseRepository::new(&self.store, &self.keys.exercises, self.clock.as_ref())
    }

    pub fn routines(&self) -> RoutineRepository<'_, S> {
        RoutineRepository::new(&self.store, &self.keys.routines, self.clock.as_ref())
    }

    pub fn sessions(&self) -> SessionRepository<'_, S> {
        SessionRepository::new(&self.store, &self.keys.sessions, self.clock.as_ref())
    }
}
