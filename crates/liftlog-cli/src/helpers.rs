//! Argument resolution shared by the command handlers.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use liftlog_core::types::{DayTemplate, Exercise, RoutineTemplate, SessionSet, WorkoutSession};

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(anyhow::anyhow!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
}

/// First eight characters of an ID, for tables.
pub fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Exactly one match among `candidates`, else a descriptive error.
fn single<T>(mut candidates: Vec<T>, what: &str, query: &str) -> anyhow::Result<T> {
    match candidates.len() {
        0 => Err(anyhow::anyhow!("{} '{}' not found", what, query)),
        1 => Ok(candidates.remove(0)),
        n => Err(anyhow::anyhow!(
            "{} '{}' is ambiguous ({} matches); use the full ID",
            what,
            query,
            n
        )),
    }
}

fn matches_id(id: Uuid, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    !query.is_empty() && id.to_string().starts_with(&query)
}

fn same_name(name: &str, query: &str) -> bool {
    name.trim().to_lowercase() == query.trim().to_lowercase()
}

/// Resolve an exercise by exact ID, case-insensitive name, or ID prefix.
pub fn require_exercise<'a>(exercises: &'a [Exercise], query: &str) -> anyhow::Result<&'a Exercise> {
    if let Ok(id) = Uuid::parse_str(query.trim()) {
        if let Some(exercise) = exercises.iter().find(|exercise| exercise.id == id) {
            return Ok(exercise);
        }
    }
    let by_name: Vec<&Exercise> = exercises
        .iter()
        .filter(|exercise| same_name(&exercise.name, query))
        .collect();
    if !by_name.is_empty() {
        return single(by_name, "Exercise", query);
    }
    single(
        exercises
            .iter()
            .filter(|exercise| matches_id(exercise.id, query))
            .collect(),
        "Exercise",
        query,
    )
}

/// Resolve a routine by exact ID, case-insensitive name, or ID prefix.
pub fn require_routine<'a>(
    routines: &'a [RoutineTemplate],
    query: &str,
) -> anyhow::Result<&'a RoutineTemplate> {
    if let Ok(id) = Uuid::parse_str(query.trim()) {
        if let Some(routine) = routines.iter().find(|routine| routine.id == id) {
            return Ok(routine);
        }
    }
    let by_name: Vec<&RoutineTemplate> = routines
        .iter()
        .filter(|routine| same_name(&routine.name, query))
        .collect();
    if !by_name.is_empty() {
        return single(by_name, "Routine", query);
    }
    single(
        routines
            .iter()
            .filter(|routine| matches_id(routine.id, query))
            .collect(),
        "Routine",
        query,
    )
}

/// Resolve a day by ID or name, across all routines or within one.
pub fn require_day<'a>(
    routines: &'a [RoutineTemplate],
    query: &str,
) -> anyhow::Result<(&'a RoutineTemplate, &'a DayTemplate)> {
    let days: Vec<(&RoutineTemplate, &DayTemplate)> = routines
        .iter()
        .flat_map(|routine| routine.days.iter().map(move |day| (routine, day)))
        .collect();

    if let Ok(id) = Uuid::parse_str(query.trim()) {
        if let Some(found) = days.iter().find(|(_, day)| day.id == id) {
            return Ok(*found);
        }
    }
    let by_name: Vec<(&RoutineTemplate, &DayTemplate)> = days
        .iter()
        .filter(|(_, day)| same_name(&day.name, query))
        .copied()
        .collect();
    if !by_name.is_empty() {
        return single(by_name, "Day", query);
    }
    single(
        days.into_iter()
            .filter(|(_, day)| matches_id(day.id, query))
            .collect(),
        "Day",
        query,
    )
}

/// Resolve a session by full ID or unique ID prefix.
pub fn require_session<'a>(
    sessions: &'a [WorkoutSession],
    query: &str,
) -> anyhow::Result<&'a WorkoutSession> {
    single(
        sessions
            .iter()
            .filter(|session| matches_id(session.id, query))
            .collect(),
        "Session",
        query,
    )
}

/// Resolve a set inside a session by full ID or unique ID prefix.
pub fn require_set<'a>(session: &'a WorkoutSession, query: &str) -> anyhow::Result<&'a SessionSet> {
    single(
        session
            .entries
            .iter()
            .flat_map(|entry| entry.sets.iter())
            .filter(|set| matches_id(set.id, query))
            .collect(),
        "Set",
        query,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

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

    #[test]
    fn test_parse_datetime() {
        assert_eq!(
            parse_datetime("2024-03-05").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_datetime("2024-03-05T10:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap()
        );
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_require_exercise_by_name_and_prefix() {
        let exercises = vec![exercise("Bench Press"), exercise("Squat")];
        assert_eq!(require_exercise(&exercises, "bench press").unwrap().name, "Bench Press");

        let prefix = short_id(exercises[1].id);
        assert_eq!(require_exercise(&exercises, &prefix).unwrap().name, "Squat");
        assert!(require_exercise(&exercises, "Deadlift").is_err());
    }

    #[test]
    fn test_ambiguous_day_name_is_rejected() {
        let now = Utc::now();
        let routine = |name: &str| RoutineTemplate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            notes: None,
            days: vec![DayTemplate::new("Push")],
            created_at: now,
            updated_at: now,
        };
        let routines = vec![routine("A"), routine("B")];

        let err = require_day(&routines, "push").unwrap_err();
        assert!(err.to_string().contains("ambiguous"));

        let id = routines[1].days[0].id.to_string();
        let (owner, _) = require_day(&routines, &id).unwrap();
        assert_eq!(owner.name, "B");
    }
}
