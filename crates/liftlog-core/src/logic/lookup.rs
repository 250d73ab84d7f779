//! Resolution of weak, id-based references.
//!
//! Sessions point at exercises, routines and days by id only; any of them
//! may have been deleted or edited since. Every resolver here returns an
//! `Option` (or a display fallback) instead of assuming integrity.

use uuid::Uuid;

use crate::types::{DayTemplate, Exercise, PlannedExercise, PlannedTarget, RoutineTemplate, WorkoutSession};

/// Shown wherever an exercise id no longer resolves.
pub const UNKNOWN_EXERCISE: &str = "Unknown exercise";

pub fn find_exercise(exercises: &[Exercise], id: Uuid) -> Option<&Exercise> {
    exercises.iter().find(|exercise| exercise.id == id)
}

/// Exercise name, or [`UNKNOWN_EXERCISE`] for a dangling id.
pub fn exercise_name(exercises: &[Exercise], id: Uuid) -> &str {
    find_exercise(exercises, id)
        .map(|exercise| exercise.name.as_str())
        .unwrap_or(UNKNOWN_EXERCISE)
}

/// Case-insensitive substring search on the trimmed term. A blank term
/// matches everything.
pub fn filter_exercises_by_name<'a>(exercises: &'a [Exercise], term: &str) -> Vec<&'a Exercise> {
    let needle = term.trim().to_lowercase();
    exercises
        .iter()
        .filter(|exercise| needle.is_empty() || exercise.name.to_lowercase().contains(&needle))
        .collect()
}

/// Day template with `day_id` in any routine, with its owning routine.
pub fn find_day(routines: &[RoutineTemplate], day_id: Uuid) -> Option<(&RoutineTemplate, &DayTemplate)> {
    routines.iter().find_map(|routine| {
        routine
            .days
            .iter()
            .find(|day| day.id == day_id)
            .map(|day| (routine, day))
    })
}

pub fn planned_target_for_exercise(planned: &[PlannedExercise], exercise_id: Uuid) -> Option<PlannedTarget> {
    planned
        .iter()
        .find(|item| item.exercise_id == exercise_id)
        .map(PlannedExercise::target)
}

/// Planned target for an exercise in a session, via the session's day
/// template. `None` once the template or the planned exercise is gone.
pub fn planned_target_for_session(
    routines: &[RoutineTemplate],
    session: &WorkoutSession,
    exercise_id: Uuid,
) -> Option<PlannedTarget> {
    let (_, day) = find_day(routines, session.template_day_id)?;
    planned_target_for_exercise(&day.planned_exercises, exercise_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn exercise(name: &str) -> Exercise {
        let now = Utc::now();
        Exercise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            muscle_group: None,
            equipment: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn routine_with(day: DayTemplate) -> RoutineTemplate {
        let now = Utc::now();
        RoutineTemplate {
            id: Uuid::new_v4(),
            name: "PPL".to_string(),
            notes: None,
            days: vec![day],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_exercise_name_fallback() {
        let exercises = vec![exercise("Bench Press")];
        assert_eq!(exercise_name(&exercises, exercises[0].id), "Bench Press");
        assert_eq!(exercise_name(&exercises, Uuid::new_v4()), UNKNOWN_EXERCISE);
    }

    #[test]
    fn test_filter_by_name() {
        let exercises = vec![exercise("Bench Press"), exercise("Leg Press"), exercise("Row")];
        let found: Vec<&str> = filter_exercises_by_name(&exercises, "  PRESS ")
            .into_iter()
            .map(|exercise| exercise.name.as_str())
            .collect();
        assert_eq!(found, vec!["Bench Press", "Leg Press"]);
        assert_eq!(filter_exercises_by_name(&exercises, " ").len(), 3);
    }

    #[test]
    fn test_planned_target_resolution() {
        let bench = Uuid::new_v4();
        let mut day = DayTemplate::new("Push");
        day.planned_exercises
            .push(PlannedExercise::new(bench, 3, "6-10").with_target_weight(40.0));
        let routines = vec![routine_with(day.clone())];

        let (routine, found) = find_day(&routines, day.id).unwrap();
        assert_eq!(routine.id, routines[0].id);
        assert_eq!(found.name, "Push");

        let target = planned_target_for_exercise(&day.planned_exercises, bench).unwrap();
        assert_eq!(target.target_reps, "6-10");
        assert_eq!(target.target_weight, Some(40.0));
        assert!(planned_target_for_exercise(&day.planned_exercises, Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_deleted_day_resolves_to_nothing() {
        let now = Utc::now();
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            date: now,
            name: "Push".to_string(),
            template_day_id: Uuid::new_v4(),
            entries: Vec::new(),
            routine_template_id: None,
            duration_minutes: None,
            effort: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        let routines = vec![routine_with(DayTemplate::new("Other"))];

        assert!(find_day(&routines, session.template_day_id).is_none());
        assert!(planned_target_for_session(&routines, &session, Uuid::new_v4()).is_none());
    }
}
