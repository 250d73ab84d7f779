//! Core data types.
//!
//! Entities serialize in the camelCase JSON shape the collections have always
//! been stored in. Optional fields are omitted when absent, never written as
//! empty strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// An exercise definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,

    /// Trimmed, non-empty, unique case-insensitively
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A target for one exercise within a day template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub id: Uuid,
    pub exercise_id: Uuid,

    /// Older records may hold a fractional count; it is rounded on read
    #[serde(deserialize_with = "whole_count")]
    pub target_sets: u32,

    /// A number ("8"), a range ("6-10") or "AMRAP"
    pub target_reps: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Dense 1-based rank within the owning day
    pub order: u32,
}

impl PlannedExercise {
    pub fn new(exercise_id: Uuid, target_sets: u32, target_reps: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            target_sets,
            target_reps: target_reps.into(),
            target_weight: None,
            notes: None,
            order: 0,
        }
    }

    pub fn with_target_weight(mut self, weight: f64) -> Self {
        self.target_weight = Some(weight);
        self
    }

    pub fn target(&self) -> PlannedTarget {
        PlannedTarget {
            target_sets: self.target_sets,
            target_reps: self.target_reps.clone(),
            target_weight: self.target_weight,
        }
    }
}

fn whole_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}

/// One named day within a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTemplate {
    pub id: Uuid,
    pub name: String,

    /// Dense 1-based rank within the owning routine
    pub order: u32,

    #[serde(default)]
    pub planned_exercises: Vec<PlannedExercise>,
}

impl DayTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            order: 0,
            planned_exercises: Vec::new(),
        }
    }
}

/// A reusable multi-day training plan. Owns its days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineTemplate {
    pub id: Uuid,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub days: Vec<DayTemplate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Planned sets/reps/weight as seen by the workout logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTarget {
    pub target_sets: u32,
    pub target_reps: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

/// One logged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSet {
    pub id: Uuid,
    pub reps: u32,
    pub weight: f64,

    /// Present iff the set has been marked done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionSet {
    /// A new, uncompleted set with a fresh id.
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps,
            weight,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// reps x weight
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// The logged sets for one exercise within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    pub id: Uuid,

    /// Weak reference; the exercise may have been deleted since
    pub exercise_id: Uuid,

    #[serde(default)]
    pub sets: Vec<SessionSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionExercise {
    /// A new entry with no sets.
    pub fn new(exercise_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            sets: Vec::new(),
            notes: None,
        }
    }

    pub fn with_sets(mut self, sets: Vec<SessionSet>) -> Self {
        self.sets = sets;
        self
    }

    pub fn last_set(&self) -> Option<&SessionSet> {
        self.sets.last()
    }
}

/// One dated instance of performing a day's exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub name: String,

    /// Weak reference to a day template
    pub template_day_id: Uuid,

    #[serde(default)]
    pub entries: Vec<SessionExercise>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_template_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    /// 1..=10 when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutSession {
    pub fn entry_for_exercise(&self, exercise_id: Uuid) -> Option<&SessionExercise> {
        self.entries
            .iter()
            .find(|entry| entry.exercise_id == exercise_id)
    }

    pub fn has_exercise(&self, exercise_id: Uuid) -> bool {
        self.entry_for_exercise(exercise_id).is_some()
    }
}

/// Builder for creating new exercises.
#[derive(Debug, Clone, Default)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub notes: Option<String>,
}

impl NewExercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_muscle_group(mut self, muscle_group: impl Into<String>) -> Self {
        self.muscle_group = Some(muscle_group.into());
        self
    }

    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update for an exercise.
///
/// `None` keeps the current value. For optional fields, a value that is
/// blank after trimming clears the field.
#[derive(Debug, Clone, Default)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub notes: Option<String>,
}

impl ExercisePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn muscle_group(mut self, muscle_group: impl Into<String>) -> Self {
        self.muscle_group = Some(muscle_group.into());
        self
    }

    pub fn equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Builder for creating new routines.
#[derive(Debug, Clone, Default)]
pub struct NewRoutine {
    pub name: String,
    pub notes: Option<String>,
    /// Stored as given; order maintenance is the caller's job
    pub days: Vec<DayTemplate>,
}

impl NewRoutine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_days(mut self, days: Vec<DayTemplate>) -> Self {
        self.days = days;
        self
    }
}

/// Partial update for a routine. Day edits replace the whole `days` array.
#[derive(Debug, Clone, Default)]
pub struct RoutinePatch {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub days: Option<Vec<DayTemplate>>,
}

impl RoutinePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn days(mut self, days: Vec<DayTemplate>) -> Self {
        self.days = Some(days);
        self
    }
}

/// Input for creating a session.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub date: DateTime<Utc>,
    pub name: String,
    pub template_day_id: Uuid,
    pub entries: Vec<SessionExercise>,
    pub routine_template_id: Option<Uuid>,
    pub duration_minutes: Option<u32>,
    pub effort: Option<u8>,
    pub notes: Option<String>,
}

impl NewSession {
    pub fn new(date: DateTime<Utc>, name: impl Into<String>, template_day_id: Uuid) -> Self {
        Self {
            date,
            name: name.into(),
            template_day_id,
            entries: Vec::new(),
            routine_template_id: None,
            duration_minutes: None,
            effort: None,
            notes: None,
        }
    }

    pub fn with_entries(mut self, entries: Vec<SessionExercise>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_routine(mut self, routine_template_id: Uuid) -> Self {
        self.routine_template_id = Some(routine_template_id);
        self
    }

    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_effort(mut self, effort: u8) -> Self {
        self.effort = Some(effort);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update for a session. `None` keeps the current value; blank
/// `notes` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub date: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub template_day_id: Option<Uuid>,
    pub entries: Option<Vec<SessionExercise>>,
    pub routine_template_id: Option<Uuid>,
    pub duration_minutes: Option<u32>,
    pub effort: Option<u8>,
    pub notes: Option<String>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn template_day(mut self, template_day_id: Uuid) -> Self {
        self.template_day_id = Some(template_day_id);
        self
    }

    pub fn entries(mut self, entries: Vec<SessionExercise>) -> Self {
        self.entries = Some(entries);
        self
    }

    pub fn routine(mut self, routine_template_id: Uuid) -> Self {
        self.routine_template_id = Some(routine_template_id);
        self
    }

    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn effort(mut self, effort: u8) -> Self {
        self.effort = Some(effort);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let set = SessionSet::new(8, 60.0);
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json["reps"], 8);
        assert!(json.get("completedAt").is_none());
    }

    #[test]
    fn test_new_session_builder() {
        let day_id = Uuid::new_v4();
        let routine_id = Uuid::new_v4();
        let input = NewSession::new(Utc::now(), "Push", day_id)
            .with_routine(routine_id)
            .with_effort(7)
            .with_duration_minutes(45);

        assert_eq!(input.template_day_id, day_id);
        assert_eq!(input.routine_template_id, Some(routine_id));
        assert_eq!(input.effort, Some(7));
        assert_eq!(input.duration_minutes, Some(45));
        assert!(input.entries.is_empty());
    }

    #[test]
    fn test_fractional_target_sets_are_rounded() {
        let json = format!(
            r#"{{"id":"{}","exerciseId":"{}","targetSets":2.5,"targetReps":"8","order":1}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let planned: PlannedExercise = serde_json::from_str(&json).unwrap();
        assert_eq!(planned.target_sets, 3);

        let negative = json.replace("2.5", "-1");
        let planned: PlannedExercise = serde_json::from_str(&negative).unwrap();
        assert_eq!(planned.target_sets, 0);
    }

    #[test]
    fn test_routine_round_trips_camel_case() {
        let mut day = DayTemplate::new("Pull");
        day.planned_exercises
            .push(PlannedExercise::new(Uuid::new_v4(), 3, "6-10").with_target_weight(40.0));
        let json = serde_json::to_value(&day).unwrap();

        assert!(json.get("plannedExercises").is_some());
        assert_eq!(json["plannedExercises"][0]["targetReps"], "6-10");
        assert_eq!(json["plannedExercises"][0]["targetWeight"], 40.0);
    }
}
