//! Pure derivations over repository output.
//!
//! Nothing here touches the store. Functions that need "now" take it as an
//! argument so results are reproducible.

pub mod defaults;
pub mod factory;
pub mod history;
pub mod lookup;
pub mod order;
pub mod progress;
pub mod sets;

pub use defaults::{copy_last_set_defaults, new_set_defaults, SetDefaults, SetDefaultsInput};
pub use factory::{build_fresh_session_input, build_repeat_session_input, build_session_input_from_last};
pub use history::{exercise_totals, session_total_volume, ExerciseTotals};
pub use progress::{compute_progress_series, ProgressMetric, ProgressPoint, ProgressRange};
