//! Per-exercise progress series.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LiftlogError;
use crate::types::{SessionSet, WorkoutSession};

/// What a progress point measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressMetric {
    /// Heaviest weight among completed sets (or all sets if none completed)
    BestSetWeight,
    /// Σ reps x weight over all sets
    VolumePerWorkout,
}

impl ProgressMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressMetric::BestSetWeight => "best-set-weight",
            ProgressMetric::VolumePerWorkout => "volume-per-workout",
        }
    }
}

impl fmt::Display for ProgressMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressMetric {
    type Err = LiftlogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "best-set-weight" => Ok(ProgressMetric::BestSetWeight),
            "volume-per-workout" => Ok(ProgressMetric::VolumePerWorkout),
            other => Err(LiftlogError::InvalidInput(format!(
                "Unknown metric: {} (use best-set-weight or volume-per-workout)",
                other
            ))),
        }
    }
}

/// How far back a series reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressRange {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "ALL")]
    All,
}

impl ProgressRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressRange::OneMonth => "1M",
            ProgressRange::ThreeMonths => "3M",
            ProgressRange::SixMonths => "6M",
            ProgressRange::All => "ALL",
        }
    }

    /// Earliest included instant, or `None` for no cutoff.
    ///
    /// Calendar months are subtracted; a day that does not exist in the
    /// target month clamps to that month's last day.
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months = match self {
            ProgressRange::OneMonth => 1,
            ProgressRange::ThreeMonths => 3,
            ProgressRange::SixMonths => 6,
            ProgressRange::All => return None,
        };
        Some(
            now.checked_sub_months(Months::new(months))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        )
    }
}

impl fmt::Display for ProgressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressRange {
    type Err = LiftlogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1M" => Ok(ProgressRange::OneMonth),
            "3M" => Ok(ProgressRange::ThreeMonths),
            "6M" => Ok(ProgressRange::SixMonths),
            "ALL" => Ok(ProgressRange::All),
            other => Err(LiftlogError::InvalidInput(format!(
                "Unknown range: {} (use 1M, 3M, 6M or ALL)",
                other
            ))),
        }
    }
}

/// One value per session that logged the exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub date: DateTime<Utc>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub value: f64,
    pub session_id: Uuid,
}

/// Heaviest weight among the considered sets, 0 when there are none.
///
/// If any set is completed only completed sets are considered.
pub fn best_set_weight(sets: &[SessionSet]) -> f64 {
    let any_done = sets.iter().any(SessionSet::is_completed);
    sets.iter()
        .filter(|set| !any_done || set.is_completed())
        .map(|set| set.weight)
        .fold(0.0, f64::max)
}

/// Σ reps x weight over every set, completed or not.
pub fn workout_volume(sets: &[SessionSet]) -> f64 {
    sets.iter().map(SessionSet::volume).sum()
}

/// Progress of one exercise across sessions, oldest first.
///
/// Sessions before the range cutoff and sessions without an entry for the
/// exercise are omitted rather than zero-filled.
pub fn compute_progress_series(
    sessions: &[WorkoutSession],
    exercise_id: Uuid,
    metric: ProgressMetric,
    range: ProgressRange,
    now: DateTime<Utc>,
) -> Vec<ProgressPoint> {
    let start = range.start(now);
    let mut in_range: Vec<&WorkoutSession> = sessions
        .iter()
        .filter(|session| start.map_or(true, |start| session.date >= start))
        .collect();
    in_range.sort_by_key(|session| session.date);

    in_range
        .into_iter()
        .filter_map(|session| {
            let entry = session.entry_for_exercise(exercise_id)?;
            let value = match metric {
                ProgressMetric::BestSetWeight => best_set_weight(&entry.sets),
                ProgressMetric::VolumePerWorkout => workout_volume(&entry.sets),
            };
            Some(ProgressPoint {
                date: session.date,
                timestamp: session.date.timestamp_millis(),
                value,
                session_id: session.id,
            })
        })
        .collect()
}

/// Display form of a metric value: `"62.5 kg"` or `"1,370 vol"`.
pub fn format_metric_value(metric: ProgressMetric, value: f64) -> String {
    match metric {
        ProgressMetric::BestSetWeight => {
            let formatted = format!("{:.1}", value);
            let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
            format!("{} kg", trimmed)
        }
        ProgressMetric::VolumePerWorkout => {
            format!("{} vol", group_thousands(value.round() as i64))
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionExercise;
    use chrono::{Duration, TimeZone};

    fn session(date: DateTime<Utc>, entries: Vec<SessionExercise>) -> WorkoutSession {
        WorkoutSession {
            id: Uuid::new_v4(),
            date,
            name: "Push".to_string(),
            template_day_id: Uuid::new_v4(),
            entries,
            routine_template_id: None,
            duration_minutes: None,
            effort: None,
            notes: None,
            created_at: date,
            updated_at: date,
        }
    }

    fn done(mut set: SessionSet, at: DateTime<Utc>) -> SessionSet {
        set.completed_at = Some(at);
        set
    }

    #[test]
    fn test_best_set_weight_prefers_completed_sets() {
        let now = Utc::now();
        let bench = Uuid::new_v4();
        let first = session(
            now - Duration::days(7),
            vec![SessionExercise::new(bench).with_sets(vec![SessionSet::new(8, 60.0)])],
        );
        let second = session(
            now - Duration::days(1),
            vec![SessionExercise::new(bench).with_sets(vec![
                done(SessionSet::new(8, 60.0), now),
                SessionSet::new(6, 70.0),
            ])],
        );

        let series = compute_progress_series(
            &[second.clone(), first.clone()],
            bench,
            ProgressMetric::BestSetWeight,
            ProgressRange::All,
            now,
        );

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].session_id, first.id);
        assert_eq!(series[0].value, 60.0);
        assert_eq!(series[1].session_id, second.id);
        assert_eq!(series[1].value, 60.0);
        assert_eq!(series[1].timestamp, second.date.timestamp_millis());
    }

    #[test]
    fn test_best_set_weight_of_no_sets_is_zero() {
        assert_eq!(best_set_weight(&[]), 0.0);
    }

    #[test]
    fn test_volume_counts_uncompleted_sets() {
        let now = Utc::now();
        let sets = vec![done(SessionSet::new(5, 100.0), now), SessionSet::new(5, 80.0)];
        assert_eq!(workout_volume(&sets), 900.0);
    }

    #[test]
    fn test_range_cutoff_and_missing_entries() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let squat = Uuid::new_v4();
        let entry = || SessionExercise::new(squat).with_sets(vec![SessionSet::new(5, 100.0)]);

        let old = session(now - Duration::days(45), vec![entry()]);
        let recent = session(now - Duration::days(10), vec![entry()]);
        let unrelated = session(now - Duration::days(5), Vec::new());
        let sessions = vec![old.clone(), recent.clone(), unrelated];

        let month = compute_progress_series(
            &sessions,
            squat,
            ProgressMetric::VolumePerWorkout,
            ProgressRange::OneMonth,
            now,
        );
        assert_eq!(month.len(), 1);
        assert_eq!(month[0].session_id, recent.id);
        assert_eq!(month[0].value, 500.0);

        let all = compute_progress_series(
            &sessions,
            squat,
            ProgressMetric::VolumePerWorkout,
            ProgressRange::All,
            now,
        );
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].session_id, old.id);
    }

    #[test]
    fn test_range_start_subtracts_calendar_months() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap();
        assert_eq!(
            ProgressRange::ThreeMonths.start(now),
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
        );
        assert_eq!(ProgressRange::All.start(now), None);
    }

    #[test]
    fn test_parse_metric_and_range() {
        assert_eq!(
            "volume-per-workout".parse::<ProgressMetric>().unwrap(),
            ProgressMetric::VolumePerWorkout
        );
        assert_eq!("6m".parse::<ProgressRange>().unwrap(), ProgressRange::SixMonths);
        assert!("weekly".parse::<ProgressRange>().is_err());
    }

    #[test]
    fn test_format_metric_value() {
        assert_eq!(format_metric_value(ProgressMetric::BestSetWeight, 60.0), "60 kg");
        assert_eq!(format_metric_value(ProgressMetric::BestSetWeight, 62.5), "62.5 kg");
        assert_eq!(
            format_metric_value(ProgressMetric::VolumePerWorkout, 1370.4),
            "1,370 vol"
        );
        assert_eq!(
            format_metric_value(ProgressMetric::VolumePerWorkout, 1234567.0),
            "1,234,567 vol"
        );
        assert_eq!(format_metric_value(ProgressMetric::VolumePerWorkout, 980.0), "980 vol");
    }
}
