//! Workout sessions and history queries.

use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{LiftlogError, Result};
use crate::repo::exercises::merge_text;
use crate::repo::legacy::{upgrade_session, Upgraded, DEFAULT_SESSION_NAME};
use crate::storage::KeyValueStore;
use crate::types::{NewSession, SessionPatch, WorkoutSession};
use crate::validation::{optional_text, validate_effort, validate_entries};

/// Outcome of rewriting the sessions collection in canonical shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Records kept as they were
    pub unchanged: usize,
    /// Records rewritten from a legacy shape
    pub upgraded: usize,
    /// Records dropped as unreadable
    pub dropped: usize,
}

/// CRUD over sessions plus "last time" lookups.
///
/// Every read upgrades legacy records and silently skips unreadable ones;
/// every write persists the canonical shape only.
pub struct SessionRepository<'a, S: KeyValueStore> {
    store: &'a S,
    key: &'a str,
    clock: &'a dyn Clock,
}

impl<'a, S: KeyValueStore> SessionRepository<'a, S> {
    pub fn new(store: &'a S, key: &'a str, clock: &'a dyn Clock) -> Self {
        Self { store, key, clock }
    }

    fn load_upgraded(&self) -> Result<(Vec<Upgraded>, usize)> {
        let raw: Vec<serde_json::Value> = self.store.load(self.key, Vec::new())?;
        let total = raw.len();
        let upgraded: Vec<Upgraded> = raw.into_iter().filter_map(upgrade_session).collect();
        let dropped = total - upgraded.len();
        if dropped > 0 {
            tracing::warn!(dropped, "skipping unreadable session records");
        }
        Ok((upgraded, dropped))
    }

    fn save_all(&self, sessions: &[WorkoutSession]) -> Result<()> {
        self.store.save(self.key, sessions)
    }

    /// All readable sessions in storage order.
    pub fn list(&self) -> Result<Vec<WorkoutSession>> {
        let (upgraded, _) = self.load_upgraded()?;
        Ok(upgraded.into_iter().map(|record| record.session).collect())
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<Option<WorkoutSession>> {
        Ok(self.list()?.into_iter().find(|session| session.id == id))
    }

    /// Log a new session.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a set's reps or weight are out of
    /// range or the effort is outside 1..=10.
    pub fn add(&self, input: NewSession) -> Result<WorkoutSession> {
        let entries = validate_entries(input.entries)?;
        let effort = validate_effort(input.effort)?;
        let mut sessions = self.list()?;

        let timestamp = self.clock.now();
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            date: input.date,
            name: session_name(&input.name),
            template_day_id: input.template_day_id,
            entries,
            routine_template_id: input.routine_template_id,
            duration_minutes: input.duration_minutes,
            effort,
            notes: optional_text(input.notes.as_deref()),
            created_at: timestamp,
            updated_at: timestamp,
        };

        sessions.push(session.clone());
        self.save_all(&sessions)?;
        tracing::debug!(id = %session.id, entries = session.entries.len(), "session added");
        Ok(session)
    }

    /// Merge `patch` onto an existing session and re-stamp `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns `LiftlogError::NotFound` for an unknown id, plus the
    /// validation errors of [`add`](Self::add).
    pub fn update(&self, id: Uuid, patch: SessionPatch) -> Result<WorkoutSession> {
        let mut sessions = self.list()?;
        let current = sessions
            .iter()
            .find(|session| session.id == id)
            .cloned()
            .ok_or_else(|| LiftlogError::not_found("Session", id))?;

        let entries = match patch.entries {
            Some(entries) => validate_entries(entries)?,
            None => current.entries,
        };
        let effort = match patch.effort {
            Some(effort) => validate_effort(Some(effort))?,
            None => current.effort,
        };

        let updated = WorkoutSession {
            date: patch.date.unwrap_or(current.date),
            name: patch
                .name
                .map(|name| session_name(&name))
                .unwrap_or(current.name),
            template_day_id: patch.template_day_id.unwrap_or(current.template_day_id),
            entries,
            routine_template_id: patch.routine_template_id.or(current.routine_template_id),
            duration_minutes: patch.duration_minutes.or(current.duration_minutes),
            effort,
            notes: merge_text(patch.notes, current.notes),
            updated_at: self.clock.now(),
            ..current
        };

        for session in sessions.iter_mut() {
            if session.id == id {
                *session = updated.clone();
            }
        }
        self.save_all(&sessions)?;
        Ok(updated)
    }

    /// Hard-delete a session. Returns whether anything was removed.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        let mut sessions = self.list()?;
        let before = sessions.len();
        sessions.retain(|session| session.id != id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.save_all(&sessions)?;
        Ok(true)
    }

    /// Most recent session logged for a day template.
    pub fn last_for_template_day(&self, day_id: Uuid) -> Result<Option<WorkoutSession>> {
        Ok(latest(
            self.list()?
                .into_iter()
                .filter(|session| session.template_day_id == day_id),
        ))
    }

    /// Most recent session containing an entry for `exercise_id`.
    pub fn last_for_exercise(&self, exercise_id: Uuid) -> Result<Option<WorkoutSession>> {
        Ok(latest(
            self.list()?
                .into_iter()
                .filter(|session| session.has_exercise(exercise_id)),
        ))
    }

    /// Most recent session other than `current_session_id` that logged at
    /// least one set for `exercise_id`.
    ///
    /// This is the "previous session" used when prefilling a new set: the
    /// session being edited and sessions where the exercise was left empty
    /// are passed over.
    pub fn previous_with_sets(
        &self,
        exercise_id: Uuid,
        current_session_id: Uuid,
    ) -> Result<Option<WorkoutSession>> {
        Ok(latest(self.list()?.into_iter().filter(|session| {
            session.id != current_session_id
                && session
                    .entry_for_exercise(exercise_id)
                    .is_some_and(|entry| !entry.sets.is_empty())
        })))
    }

    /// Rewrite the stored collection in canonical shape, dropping
    /// unreadable records. Writes only when something changed.
    pub fn migrate(&self) -> Result<MigrationReport> {
        let (records, dropped) = self.load_upgraded()?;
        let upgraded = records.iter().filter(|record| record.legacy).count();
        let report = MigrationReport {
            unchanged: records.len() - upgraded,
            upgraded,
            dropped,
        };

        if upgraded > 0 || dropped > 0 {
            let sessions: Vec<WorkoutSession> =
                records.into_iter().map(|record| record.session).collect();
            self.save_all(&sessions)?;
            tracing::info!(upgraded, dropped, "sessions collection migrated");
        }
        Ok(report)
    }
}

fn session_name(name: &str) -> String {
    optional_text(Some(name)).unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string())
}

/// Session with the greatest date; the earliest one in iteration order wins a tie.
fn latest(sessions: impl Iterator<Item = WorkoutSession>) -> Option<WorkoutSession> {
    sessions.fold(None, |best: Option<WorkoutSession>, session| match best {
        Some(current) if current.date >= session.date => Some(current),
        _ => Some(session),
    })
}
