use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use liftlog_core::logic::{ProgressMetric, ProgressRange};
use liftlog_core::VERSION;

/// Liftlog - a local-first strength training log
#[derive(Parser)]
#[command(name = "liftlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory of the JSON store
    #[arg(short, long, global = true, env = "LIFTLOG_STORE")]
    pub store: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage exercises
    #[command(subcommand)]
    Exercise(ExerciseCommand),

    /// Manage routines and their days
    #[command(subcommand)]
    Routine(RoutineCommand),

    /// Log a workout
    #[command(subcommand)]
    Workout(WorkoutCommand),

    /// Browse past sessions
    #[command(subcommand)]
    History(HistoryCommand),

    /// Show progress for one exercise
    Progress(ProgressArgs),

    /// Write sample data once
    Seed,

    /// Rewrite stored sessions in the current format
    Migrate,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Subcommand)]
pub enum ExerciseCommand {
    /// List exercises
    List(ExerciseListArgs),
    /// Add an exercise
    Add(ExerciseAddArgs),
    /// Update an exercise
    Update(ExerciseUpdateArgs),
    /// Remove an exercise
    Remove(TargetArgs),
}

/// Arguments for `exercise list`
#[derive(Args)]
pub struct ExerciseListArgs {
    /// Only show exercises whose name contains this text
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `exercise add`
#[derive(Args)]
pub struct ExerciseAddArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[arg(long)]
    pub muscle_group: Option<String>,

    #[arg(long)]
    pub equipment: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `exercise update`. Empty values clear optional fields.
#[derive(Args)]
pub struct ExerciseUpdateArgs {
    /// Exercise name or ID
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub muscle_group: Option<String>,

    #[arg(long)]
    pub equipment: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

/// A single record named by name or ID
#[derive(Args)]
pub struct TargetArgs {
    /// Name or ID
    #[arg(value_name = "TARGET")]
    pub target: String,
}

#[derive(Subcommand)]
pub enum RoutineCommand {
    /// List routines
    List,
    /// Show a routine with its days and planned exercises
    Show(TargetArgs),
    /// Add a routine
    Add(RoutineAddArgs),
    /// Remove a routine
    Remove(TargetArgs),
    /// Add a day to a routine
    AddDay(AddDayArgs),
    /// Plan an exercise on a day
    Plan(PlanArgs),
}

/// Arguments for `routine add`
#[derive(Args)]
pub struct RoutineAddArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `routine add-day`
#[derive(Args)]
pub struct AddDayArgs {
    /// Routine name or ID
    #[arg(value_name = "ROUTINE")]
    pub routine: String,

    #[arg(value_name = "DAY")]
    pub name: String,

    /// 1-based position; appended when omitted
    #[arg(long)]
    pub position: Option<usize>,
}

/// Arguments for `routine plan`
#[derive(Args)]
pub struct PlanArgs {
    /// Routine name or ID
    #[arg(value_name = "ROUTINE")]
    pub routine: String,

    /// Day name or ID
    #[arg(value_name = "DAY")]
    pub day: String,

    /// Exercise name or ID
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,

    #[arg(long, default_value_t = 3)]
    pub sets: u32,

    /// A number, a range like 6-10, or AMRAP
    #[arg(long, default_value = "8")]
    pub reps: String,

    #[arg(long)]
    pub weight: Option<f64>,
}

#[derive(Subcommand)]
pub enum WorkoutCommand {
    /// Start a session for a day template
    Start(StartArgs),
    /// Start a new session from a past one
    Repeat(SessionArgs),
    /// Add a set for an exercise
    AddSet(AddSetArgs),
    /// Duplicate the last set of an exercise
    CopySet(CopySetArgs),
    /// Mark a set done, or undo it
    Toggle(ToggleArgs),
    /// Record duration, effort and notes
    Finish(FinishArgs),
}

/// Arguments for `workout start`
#[derive(Args)]
pub struct StartArgs {
    /// Day name or ID
    #[arg(value_name = "DAY")]
    pub day: String,

    /// Routine name or ID, needed when the day name is ambiguous
    #[arg(long)]
    pub routine: Option<String>,

    /// Copy every set from the last session of this day
    #[arg(long)]
    pub from_last: bool,

    /// Session date (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// A session named by ID or ID prefix
#[derive(Args)]
pub struct SessionArgs {
    /// Session ID (full UUID or prefix)
    #[arg(value_name = "SESSION")]
    pub session: String,
}

/// Arguments for `workout add-set`
#[derive(Args)]
pub struct AddSetArgs {
    /// Session ID (full UUID or prefix)
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Exercise name or ID
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,

    #[arg(long)]
    pub reps: Option<f64>,

    #[arg(long)]
    pub weight: Option<f64>,
}

/// Arguments for `workout copy-set`
#[derive(Args)]
pub struct CopySetArgs {
    /// Session ID (full UUID or prefix)
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Exercise name or ID
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,
}

/// Arguments for `workout toggle`
#[derive(Args)]
pub struct ToggleArgs {
    /// Session ID (full UUID or prefix)
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Set ID (full UUID or prefix)
    #[arg(value_name = "SET")]
    pub set: String,
}

/// Arguments for `workout finish`
#[derive(Args)]
pub struct FinishArgs {
    /// Session ID (full UUID or prefix)
    #[arg(value_name = "SESSION")]
    pub session: String,

    #[arg(long)]
    pub duration: Option<u32>,

    /// 1-10
    #[arg(long)]
    pub effort: Option<u8>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List sessions, newest first
    List(HistoryListArgs),
    /// Show one session with per-exercise totals
    Show(SessionArgs),
    /// Delete a session
    Remove(SessionArgs),
}

/// Arguments for `history list`
#[derive(Args)]
pub struct HistoryListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for `progress`
#[derive(Args)]
pub struct ProgressArgs {
    /// Exercise name or ID
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,

    /// best-set-weight or volume-per-workout
    #[arg(long, default_value = "best-set-weight")]
    pub metric: ProgressMetric,

    /// 1M, 3M, 6M or ALL
    #[arg(long, default_value = "3M")]
    pub range: ProgressRange,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
