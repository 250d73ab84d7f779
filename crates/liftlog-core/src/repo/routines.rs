//! Routine templates with their embedded days and planned exercises.

use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{LiftlogError, Result};
use crate::repo::exercises::merge_text;
use crate::storage::KeyValueStore;
use crate::types::{NewRoutine, RoutinePatch, RoutineTemplate};
use crate::validation::{optional_text, require_name};

/// CRUD over routines.
///
/// Days are stored exactly as the caller passes them; see
/// [`crate::logic::order`] for keeping `order` dense. Removing a routine
/// leaves sessions that point at it or its days as dangling references.
pub struct RoutineRepository<'a, S: KeyValueStore> {
    store: &'a S,
    key: &'a str,
    clock: &'a dyn Clock,
}

impl<'a, S: KeyValueStore> RoutineRepository<'a, S> {
    pub fn new(store: &'a S, key: &'a str, clock: &'a dyn Clock) -> Self {
        Self { store, key, clock }
    }

    pub fn list(&self) -> Result<Vec<RoutineTemplate>> {
        self.store.load_records(self.key)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<RoutineTemplate>> {
        Ok(self.list()?.into_iter().find(|routine| routine.id == id))
    }

    /// Create a routine. Names need not be unique.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the trimmed name is empty.
    pub fn add(&self, input: NewRoutine) -> Result<RoutineTemplate> {
        let name = require_name(&input.name)?;
        let mut routines = self.list()?;

        let timestamp = self.clock.now();
        let routine = RoutineTemplate {
            id: Uuid::new_v4(),
            name,
            notes: optional_text(input.notes.as_deref()),
            days: input.days,
            created_at: timestamp,
            updated_at: timestamp,
        };

        routines.push(routine.clone());
        self.store.save(self.key, &routines)?;
        tracing::debug!(id = %routine.id, days = routine.days.len(), "routine added");
        Ok(routine)
    }

    /// Merge `patch` onto an existing routine; `days` replaces the whole array.
    ///
    /// # Errors
    ///
    /// Returns `LiftlogError::NotFound` for an unknown id and
    /// `ValidationError::EmptyName` for a blank name.
    pub fn update(&self, id: Uuid, patch: RoutinePatch) -> Result<RoutineTemplate> {
        let mut routines = self.list()?;
        let current = routines
            .iter()
            .find(|routine| routine.id == id)
            .cloned()
            .ok_or_else(|| LiftlogError::not_found("Routine", id))?;

        let name = require_name(patch.name.as_deref().unwrap_or(&current.name))?;
        let updated = RoutineTemplate {
            name,
            notes: merge_text(patch.notes, current.notes),
            days: patch.days.unwrap_or(current.days),
            updated_at: self.clock.now(),
            ..current
        };

        for routine in routines.iter_mut() {
            if routine.id == id {
                *routine = updated.clone();
            }
        }
        self.store.save(self.key, &routines)?;
        Ok(updated)
    }

    /// Hard-delete a routine and everything embedded in it.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        let mut routines = self.list()?;
        let before = routines.len();
        routines.retain(|routine| routine.id != id);
        if routines.len() == before {
            return Ok(false);
        }
        self.store.save(self.key, &routines)?;
        Ok(true)
    }
}
