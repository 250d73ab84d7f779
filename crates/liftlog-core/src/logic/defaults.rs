//! Reps/weight prefilled into a newly added set.

use serde::Serialize;
use uuid::Uuid;

use crate::types::{PlannedTarget, SessionSet, WorkoutSession};
use crate::validation::{clamp_reps, clamp_weight};

/// Reps used when a target cannot be turned into a number.
pub const DEFAULT_REPS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetDefaults {
    pub reps: u32,
    pub weight: f64,
}

impl SetDefaults {
    fn from_set(set: &SessionSet) -> Self {
        Self {
            reps: clamp_reps(f64::from(set.reps)),
            weight: clamp_weight(set.weight),
        }
    }

    /// A fresh, uncompleted set with these values.
    pub fn into_set(self) -> SessionSet {
        SessionSet::new(self.reps, self.weight)
    }
}

/// Everything [`new_set_defaults`] looks at.
#[derive(Debug, Clone, Copy)]
pub struct SetDefaultsInput<'a> {
    /// Sets already logged for this exercise in the current session
    pub current_sets: &'a [SessionSet],
    /// Most recent earlier session that logged this exercise
    pub last_exercise_session: Option<&'a WorkoutSession>,
    pub exercise_id: Uuid,
    /// Target from the session's day template, if it still resolves
    pub planned_target: Option<&'a PlannedTarget>,
}

/// Default reps from a target string.
///
/// `"8"` gives 8, a range `"6-10"` gives its low bound, `"AMRAP"` and
/// anything unparseable give [`DEFAULT_REPS`]. A blank number (a
/// whitespace-only target, or a range with no low bound such as `"-5"`)
/// reads as 0.
pub fn derive_default_reps(target_reps: Option<&str>) -> u32 {
    let Some(target) = target_reps.filter(|target| !target.is_empty()) else {
        return DEFAULT_REPS;
    };
    let target = target.trim();
    if target.eq_ignore_ascii_case("AMRAP") {
        return DEFAULT_REPS;
    }

    let candidate = match target.split_once('-') {
        Some((low, _)) => low.trim(),
        None => target,
    };
    if candidate.is_empty() {
        return 0;
    }
    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => clamp_reps(value),
        _ => DEFAULT_REPS,
    }
}

/// Defaults for a new set, first match wins:
///
/// 1. the last set already logged in this session
/// 2. the last set logged for the exercise in the previous session
/// 3. the planned target (reps via [`derive_default_reps`], weight or 0)
pub fn new_set_defaults(input: &SetDefaultsInput<'_>) -> SetDefaults {
    if let Some(last) = input.current_sets.last() {
        return SetDefaults::from_set(last);
    }

    let previous = input
        .last_exercise_session
        .and_then(|session| session.entry_for_exercise(input.exercise_id))
        .and_then(|entry| entry.last_set());
    if let Some(previous) = previous {
        return SetDefaults::from_set(previous);
    }

    SetDefaults {
        reps: derive_default_reps(input.planned_target.map(|target| target.target_reps.as_str())),
        weight: clamp_weight(
            input
                .planned_target
                .and_then(|target| target.target_weight)
                .unwrap_or(0.0),
        ),
    }
}

/// Values of the most recent set, or `None` when there is nothing to copy.
pub fn copy_last_set_defaults(current_sets: &[SessionSet]) -> Option<SetDefaults> {
    current_sets.last().map(SetDefaults::from_set)
}

/// `"3 sets · 6-10 reps · 40 kg"`
pub fn format_planned_target(target: &PlannedTarget) -> String {
    let mut pieces = vec![
        format!("{} sets", target.target_sets),
        format!("{} reps", target.target_reps),
    ];
    if let Some(weight) = target.target_weight {
        pieces.push(format!("{} kg", weight));
    }
    pieces.join(" · ")
}
