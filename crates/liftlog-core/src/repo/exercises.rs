//! Exercise definitions.

use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{LiftlogError, Result, ValidationError};
use crate::storage::KeyValueStore;
use crate::types::{Exercise, ExercisePatch, NewExercise};
use crate::validation::{name_key, optional_text, require_name};

/// CRUD over exercises; names are unique case-insensitively.
///
/// Removing an exercise does not touch routines or sessions referencing it.
pub struct ExerciseRepository<'a, S: KeyValueStore> {
    store: &'a S,
    key: &'a str,
    clock: &'a dyn Clock,
}

impl<'a, S: KeyValueStore> ExerciseRepository<'a, S> {
    pub fn new(store: &'a S, key: &'a str, clock: &'a dyn Clock) -> Self {
        Self { store, key, clock }
    }

    /// All exercises in storage order.
    pub fn list(&self) -> Result<Vec<Exercise>> {
        self.store.load_records(self.key)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Exercise>> {
        Ok(self.list()?.into_iter().find(|exercise| exercise.id == id))
    }

    /// Create an exercise.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the trimmed name is empty and
    /// `ValidationError::DuplicateName` if another exercise has the same
    /// name ignoring case.
    pub fn add(&self, input: NewExercise) -> Result<Exercise> {
        let name = require_name(&input.name)?;
        let mut exercises = self.list()?;
        ensure_unique(&exercises, &name, None)?;

        let timestamp = self.clock.now();
        let exercise = Exercise {
            id: Uuid::new_v4(),
            name,
            muscle_group: optional_text(input.muscle_group.as_deref()),
            equipment: optional_text(input.equipment.as_deref()),
            notes: optional_text(input.notes.as_deref()),
            created_at: timestamp,
            updated_at: timestamp,
        };

        exercises.push(exercise.clone());
        self.store.save(self.key, &exercises)?;
        tracing::debug!(id = %exercise.id, name = %exercise.name, "exercise added");
        Ok(exercise)
    }

    /// Merge `patch` onto an existing exercise.
    ///
    /// # Errors
    ///
    /// Returns `LiftlogError::NotFound` for an unknown id, plus the
    /// validation errors of [`add`](Self::add) (the exercise itself is
    /// excluded from the uniqueness check).
    pub fn update(&self, id: Uuid, patch: ExercisePatch) -> Result<Exercise> {
        let mut exercises = self.list()?;
        let current = exercises
            .iter()
            .find(|exercise| exercise.id == id)
            .cloned()
            .ok_or_else(|| LiftlogError::not_found("Exercise", id))?;

        let name = require_name(patch.name.as_deref().unwrap_or(&current.name))?;
        ensure_unique(&exercises, &name, Some(id))?;

        let updated = Exercise {
            name,
            muscle_group: merge_text(patch.muscle_group, current.muscle_group),
            equipment: merge_text(patch.equipment, current.equipment),
            notes: merge_text(patch.notes, current.notes),
            updated_at: self.clock.now(),
            ..current
        };

        for exercise in exercises.iter_mut() {
            if exercise.id == id {
                *exercise = updated.clone();
            }
        }
        self.store.save(self.key, &exercises)?;
        Ok(updated)
    }

    /// Hard-delete an exercise. Returns whether anything was removed.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        let mut exercises = self.list()?;
        let before = exercises.len();
        exercises.retain(|exercise| exercise.id != id);
        if exercises.len() == before {
            return Ok(false);
        }
        self.store.save(self.key, &exercises)?;
        Ok(true)
    }
}

fn ensure_unique(
    exercises: &[Exercise],
    name: &str,
    ignore_id: Option<Uuid>,
) -> std::result::Result<(), ValidationError> {
    let key = name_key(name);
    let duplicate = exercises
        .iter()
        .any(|exercise| Some(exercise.id) != ignore_id && name_key(&exercise.name) == key);
    if duplicate {
        return Err(ValidationError::DuplicateName);
    }
    Ok(())
}

/// `None` keeps the current value; a blank replacement clears it.
pub(crate) fn merge_text(patch: Option<String>, current: Option<String>) -> Option<String> {
    match patch {
        Some(value) => optional_text(Some(&value)),
        None => current,
    }
}
