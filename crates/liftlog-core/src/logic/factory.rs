//! Session-creation inputs built from templates and history.
//!
//! Every builder mints fresh entry and set ids and never carries completion
//! stamps over; the result is passed to `SessionRepository::add`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logic::order::sort_by_order;
use crate::types::{DayTemplate, NewSession, SessionExercise, SessionSet, WorkoutSession};

fn clone_set(set: &SessionSet) -> SessionSet {
    SessionSet::new(set.reps, set.weight)
}

/// "Repeat workout": same name and references, one entry per original entry
/// seeded with a copy of that entry's last set (no sets if it had none).
pub fn build_repeat_session_input(session: &WorkoutSession, now: DateTime<Utc>) -> NewSession {
    let entries = session
        .entries
        .iter()
        .map(|entry| {
            SessionExercise::new(entry.exercise_id)
                .with_sets(entry.last_set().map(clone_set).into_iter().collect())
        })
        .collect();

    NewSession {
        routine_template_id: session.routine_template_id,
        ..NewSession::new(now, session.name.clone(), session.template_day_id)
    }
    .with_entries(entries)
}

/// An empty entry per planned exercise, in template order.
pub fn build_fresh_session_input(
    day: &DayTemplate,
    routine_template_id: Option<Uuid>,
    now: DateTime<Utc>,
) -> NewSession {
    let entries = sort_by_order(&day.planned_exercises)
        .into_iter()
        .map(|planned| SessionExercise::new(planned.exercise_id))
        .collect();

    NewSession {
        routine_template_id,
        ..NewSession::new(now, day.name.clone(), day.id)
    }
    .with_entries(entries)
}

/// "Start from last time": one entry per planned exercise, in template
/// order, cloning every set the previous session logged for that exercise.
/// Exercises missing from the previous session start empty.
pub fn build_session_input_from_last(
    day: &DayTemplate,
    last_session: &WorkoutSession,
    routine_template_id: Option<Uuid>,
    now: DateTime<Utc>,
) -> NewSession {
    let entries = sort_by_order(&day.planned_exercises)
        .into_iter()
        .map(|planned| {
            let sets = last_session
                .entry_for_exercise(planned.exercise_id)
                .map(|entry| entry.sets.iter().map(clone_set).collect())
                .unwrap_or_default();
            SessionExercise::new(planned.exercise_id).with_sets(sets)
        })
        .collect();

    NewSession {
        routine_template_id,
        ..NewSession::new(now, day.name.clone(), day.id)
    }
    .with_entries(entries)
}
