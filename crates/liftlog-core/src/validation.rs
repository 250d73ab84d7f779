//! Shared validation and numeric normalization.

use crate::error::ValidationError;
use crate::types::{SessionExercise, SessionSet};

pub const MAX_REPS: u32 = 999;
pub const MAX_WEIGHT: f64 = 9999.0;
pub const MIN_EFFORT: u8 = 1;
pub const MAX_EFFORT: u8 = 10;

/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round and clamp a rep count into `[0, MAX_REPS]`. NaN maps to 0.
pub fn clamp_reps(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(MAX_REPS)) as u32
}

/// Clamp a weight into `[0, MAX_WEIGHT]` and round to 2 decimals. NaN maps to 0.
pub fn clamp_weight(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    round2(value.clamp(0.0, MAX_WEIGHT))
}

/// Trim `name` and reject it if nothing is left.
pub fn require_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Comparison key for case-insensitive name uniqueness.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Trim an optional text field; blank values become absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Check a set's numeric ranges and round its weight to 2 decimals.
pub fn validate_set(set: SessionSet) -> Result<SessionSet, ValidationError> {
    if set.reps > MAX_REPS {
        return Err(ValidationError::InvalidReps { max: MAX_REPS });
    }
    if !set.weight.is_finite() || set.weight < 0.0 || set.weight > MAX_WEIGHT {
        return Err(ValidationError::InvalidWeight {
            max: MAX_WEIGHT as u32,
        });
    }
    Ok(SessionSet {
        weight: round2(set.weight),
        ..set
    })
}

/// Validate every set of every entry.
pub fn validate_entries(
    entries: Vec<SessionExercise>,
) -> Result<Vec<SessionExercise>, ValidationError> {
    entries
        .into_iter()
        .map(|entry| {
            let sets = entry
                .sets
                .into_iter()
                .map(validate_set)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SessionExercise {
                sets,
                notes: optional_text(entry.notes.as_deref()),
                ..entry
            })
        })
        .collect()
}

pub fn validate_effort(effort: Option<u8>) -> Result<Option<u8>, ValidationError> {
    match effort {
        Some(value) if !(MIN_EFFORT..=MAX_EFFORT).contains(&value) => {
            Err(ValidationError::InvalidEffort)
        }
        other => Ok(other),
    }
}
