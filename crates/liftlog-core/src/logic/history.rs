//! Totals shown in workout history.

use serde::Serialize;

use crate::types::{SessionExercise, WorkoutSession};
use crate::validation::round2;

/// Per-entry totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTotals {
    pub total_sets: usize,
    pub total_reps: u32,
    /// Σ reps x weight, rounded to 2 decimals
    pub total_volume: f64,
}

pub fn exercise_totals(entry: &SessionExercise) -> ExerciseTotals {
    ExerciseTotals {
        total_sets: entry.sets.len(),
        total_reps: entry.sets.iter().map(|set| set.reps).sum(),
        total_volume: round2(entry.sets.iter().map(|set| set.volume()).sum()),
    }
}

/// Sum of the (already rounded) entry volumes, rounded to 2 decimals.
pub fn session_total_volume(session: &WorkoutSession) -> f64 {
    round2(
        session
            .entries
            .iter()
            .map(|entry| exercise_totals(entry).total_volume)
            .sum(),
    )
}

/// Sessions ordered by date, newest first. Equal dates keep their input order.
pub fn sessions_newest_first(sessions: &[WorkoutSession]) -> Vec<WorkoutSession> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
