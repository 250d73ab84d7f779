//! Editing of logged sets inside a session's entries.
//!
//! All helpers are value-in/value-out; the caller persists the result with
//! `SessionRepository::update`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logic::defaults::{copy_last_set_defaults, SetDefaults};
use crate::types::{SessionExercise, SessionSet};
use crate::validation::{clamp_reps, clamp_weight};

/// Flip a set between done and not done.
///
/// Marking done stamps `completed_at = now`; marking it again clears the
/// stamp entirely, so toggling twice returns an undone set to its original
/// state.
pub fn toggle_done(set: &SessionSet, now: DateTime<Utc>) -> SessionSet {
    SessionSet {
        completed_at: match set.completed_at {
            Some(_) => None,
            None => Some(now),
        },
        ..set.clone()
    }
}

pub fn adjust_reps(set: &SessionSet, delta: i32) -> SessionSet {
    SessionSet {
        reps: clamp_reps(f64::from(set.reps) + f64::from(delta)),
        ..set.clone()
    }
}

pub fn adjust_weight(set: &SessionSet, delta: f64) -> SessionSet {
    SessionSet {
        weight: clamp_weight(set.weight + delta),
        ..set.clone()
    }
}

/// Manually entered reps, clamped.
pub fn with_reps(set: &SessionSet, reps: f64) -> SessionSet {
    SessionSet {
        reps: clamp_reps(reps),
        ..set.clone()
    }
}

/// Manually entered weight, clamped and rounded.
pub fn with_weight(set: &SessionSet, weight: f64) -> SessionSet {
    SessionSet {
        weight: clamp_weight(weight),
        ..set.clone()
    }
}

/// Append a fresh set built from `defaults`.
pub fn append_set(entry: &SessionExercise, defaults: SetDefaults) -> SessionExercise {
    let mut updated = entry.clone();
    updated.sets.push(defaults.into_set());
    updated
}

/// Append a copy of the most recent set; `None` when there is nothing to copy.
pub fn copy_last_set(entry: &SessionExercise) -> Option<SessionExercise> {
    copy_last_set_defaults(&entry.sets).map(|defaults| append_set(entry, defaults))
}

pub fn remove_set(entry: &SessionExercise, set_id: Uuid) -> SessionExercise {
    SessionExercise {
        sets: entry
            .sets
            .iter()
            .filter(|set| set.id != set_id)
            .cloned()
            .collect(),
        ..entry.clone()
    }
}

/// Apply `updater` to the entry with `entry_id`, leaving the others as-is.
pub fn update_entry(
    entries: &[SessionExercise],
    entry_id: Uuid,
    updater: impl Fn(&SessionExercise) -> SessionExercise,
) -> Vec<SessionExercise> {
    entries
        .iter()
        .map(|entry| {
            if entry.id == entry_id {
                updater(entry)
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Apply `updater` to the set with `set_id`, leaving the others as-is.
pub fn update_set(
    entry: &SessionExercise,
    set_id: Uuid,
    updater: impl Fn(&SessionSet) -> SessionSet,
) -> SessionExercise {
    SessionExercise {
        sets: entry
            .sets
            .iter()
            .map(|set| if set.id == set_id { updater(set) } else { set.clone() })
            .collect(),
        ..entry.clone()
    }
}

/// Entry containing the set with `set_id`.
pub fn entry_for_set(entries: &[SessionExercise], set_id: Uuid) -> Option<&SessionExercise> {
    entries
        .iter()
        .find(|entry| entry.sets.iter().any(|set| set.id == set_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_toggle_twice_clears_completion() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let set = SessionSet::new(8, 60.0);

        let done = toggle_done(&set, now);
        assert_eq!(done.completed_at, Some(now));
        assert_eq!(done.id, set.id);

        let undone = toggle_done(&done, now);
        assert_eq!(undone, set);
    }

    #[test]
    fn test_toggle_completed_set_clears_original_stamp() {
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut set = SessionSet::new(8, 60.0);
        set.completed_at = Some(earlier);

        let once = toggle_done(&set, Utc::now());
        assert!(once.completed_at.is_none());
    }

    #[test]
    fn test_adjustments_are_clamped() {
        let set = SessionSet::new(1, 2.5);
        assert_eq!(adjust_reps(&set, -5).reps, 0);
        assert_eq!(adjust_reps(&set, 2000).reps, 999);
        assert_eq!(adjust_weight(&set, -10.0).weight, 0.0);
        assert_eq!(adjust_weight(&set, 2.5).weight, 5.0);
        assert_eq!(with_reps(&set, 7.4).reps, 7);
        assert_eq!(with_weight(&set, 10000.0).weight, 9999.0);
    }

    #[test]
    fn test_copy_last_set() {
        let empty = SessionExercise::new(Uuid::new_v4());
        assert!(copy_last_set(&empty).is_none());

        let entry = empty.with_sets(vec![SessionSet::new(5, 80.0)]);
        let copied = copy_last_set(&entry).unwrap();
        assert_eq!(copied.sets.len(), 2);
        assert_eq!((copied.sets[1].reps, copied.sets[1].weight), (5, 80.0));
        assert_ne!(copied.sets[1].id, copied.sets[0].id);
    }

    #[test]
    fn test_update_and_remove_set() {
        let first = SessionSet::new(5, 80.0);
        let second = SessionSet::new(5, 85.0);
        let entry = SessionExercise::new(Uuid::new_v4())
            .with_sets(vec![first.clone(), second.clone()]);
        let other = SessionExercise::new(Uuid::new_v4());
        let entries = vec![entry.clone(), other.clone()];

        let updated = update_entry(&entries, entry.id, |entry| {
            update_set(entry, second.id, |set| adjust_reps(set, 1))
        });
        assert_eq!(updated[0].sets[1].reps, 6);
        assert_eq!(updated[0].sets[0], first);
        assert_eq!(updated[1], other);

        assert_eq!(entry_for_set(&updated, second.id).map(|e| e.id), Some(entry.id));

        let trimmed = remove_set(&updated[0], first.id);
        assert_eq!(trimmed.sets.len(), 1);
        assert_eq!(trimmed.sets[0].id, second.id);
    }
}
