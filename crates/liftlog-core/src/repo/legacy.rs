//! Upgrade of stored session records into the canonical shape.
//!
//! Older records used `dayTemplateId` / `startedAt` / `exercises` where the
//! current shape has `templateDayId` / `date` / `entries`, and some lack
//! `name` or timestamps. Every record is upgraded once, at load time, into a
//! single [`WorkoutSession`]; the legacy aliases never survive into memory
//! or into the next write.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::types::{SessionExercise, WorkoutSession};
use crate::validation::{MAX_EFFORT, MIN_EFFORT};

/// Name given to records stored without one.
pub const DEFAULT_SESSION_NAME: &str = "Workout";

/// Any session shape ever written to the sessions collection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    id: Uuid,
    date: Option<DateTime<Utc>>,
    name: Option<String>,
    template_day_id: Option<Uuid>,
    entries: Option<Vec<SessionExercise>>,
    routine_template_id: Option<Uuid>,
    duration_minutes: Option<u32>,
    effort: Option<f64>,
    notes: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,

    day_template_id: Option<Uuid>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    exercises: Option<Vec<SessionExercise>>,
}

impl StoredSession {
    fn is_canonical(&self) -> bool {
        self.date.is_some()
            && self.name.is_some()
            && self.template_day_id.is_some()
            && self.entries.is_some()
            && self.created_at.is_some()
            && self.updated_at.is_some()
            && self.day_template_id.is_none()
            && self.started_at.is_none()
            && self.ended_at.is_none()
            && self.exercises.is_none()
    }
}

/// A record read back in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct Upgraded {
    pub session: WorkoutSession,
    /// The stored record was not already in canonical shape.
    pub legacy: bool,
}

/// Upgrade one stored record.
///
/// Modern field names win over legacy ones. Returns `None` when the record
/// cannot be read: it fails to decode, carries no day-template reference
/// under either name, or has no usable date at all.
pub fn upgrade_session(value: serde_json::Value) -> Option<Upgraded> {
    let stored: StoredSession = match serde_json::from_value(value) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::debug!(error = %err, "session record failed to decode");
            return None;
        }
    };

    let template_day_id = stored.template_day_id.or(stored.day_template_id)?;
    let date = stored.date.or(stored.started_at).or(stored.created_at)?;
    let created_at = stored.created_at.unwrap_or(date);
    let effort = stored
        .effort
        .filter(|effort| effort.fract() == 0.0)
        .filter(|effort| (f64::from(MIN_EFFORT)..=f64::from(MAX_EFFORT)).contains(effort))
        .map(|effort| effort as u8);
    let legacy = !stored.is_canonical() || effort.is_none() && stored.effort.is_some();

    let session = WorkoutSession {
        id: stored.id,
        date,
        name: stored
            .name
            .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
        template_day_id,
        entries: stored.entries.or(stored.exercises).unwrap_or_default(),
        routine_template_id: stored.routine_template_id,
        duration_minutes: stored.duration_minutes,
        effort,
        notes: stored.notes,
        created_at,
        updated_at: stored.updated_at.unwrap_or(created_at),
    };

    Some(Upgraded { session, legacy })
}
