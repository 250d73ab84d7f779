//! One-time sample data: a Push/Pull/Legs routine and one logged session.

use chrono::Duration;
use uuid::Uuid;

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;
use crate::types::{
    DayTemplate, Exercise, PlannedExercise, RoutineTemplate, SessionExercise, SessionSet,
    WorkoutSession,
};
use crate::validation::name_key;

const SEEDED: &str = "true";

const EXERCISE_NAMES: [&str; 9] = [
    "Bench Press",
    "Overhead Press",
    "Triceps Pushdown",
    "Deadlift",
    "Barbell Row",
    "Pull-Up",
    "Back Squat",
    "Leg Press",
    "Romanian Deadlift",
];

/// (day name, [(exercise index, target sets, target reps)])
const DAYS: [(&str, [(usize, u32, &str); 3]); 3] = [
    ("Push", [(0, 3, "6-10"), (1, 3, "6-10"), (2, 3, "10-15")]),
    ("Pull", [(3, 2, "5-8"), (4, 3, "6-10"), (5, 3, "6-12")]),
    ("Legs", [(6, 3, "5-8"), (7, 3, "10-15"), (8, 3, "8-12")]),
];

pub fn is_seeded<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<bool> {
    Ok(tracker.store().get(&tracker.keys().seeded)?.as_deref() == Some(SEEDED))
}

/// Write the sample data unless the seeded flag is already set.
///
/// Records are appended to whatever the collections already hold. A sample
/// exercise whose name already exists (ignoring case) is reused rather than
/// duplicated. Returns `true` when data was written.
pub fn seed_sample_data_once<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<bool> {
    if is_seeded(tracker)? {
        tracing::debug!("sample data already seeded");
        return Ok(false);
    }

    let now = tracker.now();
    let mut all_exercises = tracker.exercises().list()?;
    let mut created = 0;
    let exercise_ids: Vec<Uuid> = EXERCISE_NAMES
        .iter()
        .map(|name| {
            let key = name_key(name);
            if let Some(existing) = all_exercises
                .iter()
                .find(|exercise| name_key(&exercise.name) == key)
            {
                return existing.id;
            }
            let exercise = Exercise {
                id: Uuid::new_v4(),
                name: name.to_string(),
                muscle_group: None,
                equipment: None,
                notes: None,
                created_at: now,
                updated_at: now,
            };
            let id = exercise.id;
            all_exercises.push(exercise);
            created += 1;
            id
        })
        .collect();

    let days: Vec<DayTemplate> = DAYS
        .iter()
        .zip(1..)
        .map(|((name, planned), day_order)| {
            let mut day = DayTemplate::new(*name);
            day.order = day_order;
            day.planned_exercises = planned
                .iter()
                .zip(1..)
                .map(|(&(index, sets, reps), order)| {
                    let mut item = PlannedExercise::new(exercise_ids[index], sets, reps);
                    item.order = order;
                    item
                })
                .collect();
            day
        })
        .collect();

    let routine = RoutineTemplate {
        id: Uuid::new_v4(),
        name: "PPL".to_string(),
        notes: Some("Push / Pull / Legs".to_string()),
        days,
        created_at: now,
        updated_at: now,
    };

    let push = &routine.days[0];
    let logged = |sets: &[(u32, f64)]| -> Vec<SessionSet> {
        sets.iter()
            .map(|&(reps, weight)| SessionSet::new(reps, weight))
            .collect()
    };
    let two_days_ago = now - Duration::days(2);
    let session = WorkoutSession {
        id: Uuid::new_v4(),
        date: two_days_ago,
        name: push.name.clone(),
        template_day_id: push.id,
        entries: vec![
            SessionExercise::new(exercise_ids[0])
                .with_sets(logged(&[(8, 60.0), (8, 62.5), (6, 65.0)])),
            SessionExercise::new(exercise_ids[1]).with_sets(logged(&[(8, 35.0), (8, 37.5)])),
        ],
        routine_template_id: Some(routine.id),
        duration_minutes: None,
        effort: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    let store = tracker.store();
    let keys = tracker.keys();

    store.save(&keys.exercises, &all_exercises)?;

    let mut routines = tracker.routines().list()?;
    routines.push(routine);
    store.save(&keys.routines, &routines)?;

    let mut sessions = tracker.sessions().list()?;
    sessions.push(session);
    store.save(&keys.sessions, &sessions)?;

    store.set(&keys.seeded, SEEDED.to_string())?;
    tracing::info!(
        exercises = created,
        reused = EXERCISE_NAMES.len() - created,
        "seeded sample data"
    );
    Ok(true)
}
