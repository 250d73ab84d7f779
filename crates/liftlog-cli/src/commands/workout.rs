//! Logging a session: start, add and edit sets, finish.

use liftlog_core::logic::defaults::{new_set_defaults, SetDefaultsInput};
use liftlog_core::logic::lookup::planned_target_for_session;
use liftlog_core::logic::sets::{
    append_set, copy_last_set, entry_for_set, toggle_done, update_entry, update_set,
};
use liftlog_core::logic::{
    build_fresh_session_input, build_repeat_session_input, build_session_input_from_last,
};
use liftlog_core::types::{SessionExercise, SessionPatch, WorkoutSession};
use liftlog_core::validation::{clamp_reps, clamp_weight};

use crate::app::AppContext;
use crate::cli::{
    AddSetArgs, CopySetArgs, FinishArgs, SessionArgs, StartArgs, ToggleArgs, WorkoutCommand,
};
use crate::helpers::{
    parse_datetime, require_day, require_exercise, require_routine, require_session, require_set,
};
use crate::output::{format_weight, print_json};

pub fn handle(ctx: &AppContext, command: &WorkoutCommand) -> anyhow::Result<()> {
    match command {
        WorkoutCommand::Start(args) => handle_start(ctx, args),
        WorkoutCommand::Repeat(args) => handle_repeat(ctx, args),
        WorkoutCommand::AddSet(args) => handle_add_set(ctx, args),
        WorkoutCommand::CopySet(args) => handle_copy_set(ctx, args),
        WorkoutCommand::Toggle(args) => handle_toggle(ctx, args),
        WorkoutCommand::Finish(args) => handle_finish(ctx, args),
    }
}

fn report_session(ctx: &AppContext, verb: &str, session: &WorkoutSession) -> anyhow::Result<()> {
    if ctx.json() {
        return print_json(session);
    }
    if !ctx.quiet() {
        println!("{} '{}' ({})", verb, session.name, session.id);
    }
    Ok(())
}

fn handle_start(ctx: &AppContext, args: &StartArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let routines = tracker.routines().list()?;
    let (routine, day) = match args.routine.as_deref() {
        Some(query) => {
            let routine = require_routine(&routines, query)?;
            require_day(std::slice::from_ref(routine), &args.day)?
        }
        None => require_day(&routines, &args.day)?,
    };
    let date = match args.date.as_deref() {
        Some(value) => parse_datetime(value)?,
        None => tracker.now(),
    };

    let input = if args.from_last {
        match tracker.sessions().last_for_template_day(day.id)? {
            Some(last) => build_session_input_from_last(day, &last, Some(routine.id), date),
            None => {
                tracing::info!(day = %day.name, "no previous session for day, starting fresh");
                build_fresh_session_input(day, Some(routine.id), date)
            }
        }
    } else {
        build_fresh_session_input(day, Some(routine.id), date)
    };

    let session = tracker.sessions().add(input)?;
    report_session(ctx, "Started", &session)
}

fn handle_repeat(ctx: &AppContext, args: &SessionArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let sessions = tracker.sessions().list()?;
    let original = require_session(&sessions, &args.session)?;

    let input = build_repeat_session_input(original, tracker.now());
    let session = tracker.sessions().add(input)?;
    report_session(ctx, "Started", &session)
}

fn handle_add_set(ctx: &AppContext, args: &AddSetArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let exercise = require_exercise(&exercises, &args.exercise)?;
    let sessions = tracker.sessions().list()?;
    let session = require_session(&sessions, &args.session)?;

    let mut entries = session.entries.clone();
    if !session.has_exercise(exercise.id) {
        entries.push(SessionExercise::new(exercise.id));
    }
    let entry = entries
        .iter()
        .find(|entry| entry.exercise_id == exercise.id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Exercise '{}' is not in this session", exercise.name))?;

    let routines = tracker.routines().list()?;
    let planned_target = planned_target_for_session(&routines, session, exercise.id);
    let last_exercise_session = tracker
        .sessions()
        .previous_with_sets(exercise.id, session.id)?;
    let mut defaults = new_set_defaults(&SetDefaultsInput {
        current_sets: &entry.sets,
        last_exercise_session: last_exercise_session.as_ref(),
        exercise_id: exercise.id,
        planned_target: planned_target.as_ref(),
    });
    if let Some(reps) = args.reps {
        defaults.reps = clamp_reps(reps);
    }
    if let Some(weight) = args.weight {
        defaults.weight = clamp_weight(weight);
    }

    let entries = update_entry(&entries, entry.id, |entry| append_set(entry, defaults));
    let updated = tracker
        .sessions()
        .update(session.id, SessionPatch::new().entries(entries))?;
    let set = updated
        .entry_for_exercise(exercise.id)
        .and_then(SessionExercise::last_set)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Set was not saved"))?;

    if ctx.json() {
        return print_json(&set);
    }
    if !ctx.quiet() {
        println!(
            "Added set to {} in '{}': {} x {} kg ({})",
            exercise.name,
            updated.name,
            set.reps,
            format_weight(set.weight),
            set.id
        );
    }
    Ok(())
}

fn handle_copy_set(ctx: &AppContext, args: &CopySetArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let exercise = require_exercise(&exercises, &args.exercise)?;
    let sessions = tracker.sessions().list()?;
    let session = require_session(&sessions, &args.session)?;

    let entry = session
        .entry_for_exercise(exercise.id)
        .ok_or_else(|| anyhow::anyhow!("Exercise '{}' is not in this session", exercise.name))?;
    let copied = copy_last_set(entry)
        .ok_or_else(|| anyhow::anyhow!("No sets logged for '{}' yet", exercise.name))?;
    let set = copied
        .last_set()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No sets logged for '{}' yet", exercise.name))?;

    let entries = update_entry(&session.entries, entry.id, |_| copied.clone());
    tracker
        .sessions()
        .update(session.id, SessionPatch::new().entries(entries))?;

    if ctx.json() {
        return print_json(&set);
    }
    if !ctx.quiet() {
        println!(
            "Copied set for {}: {} x {} kg ({})",
            exercise.name,
            set.reps,
            format_weight(set.weight),
            set.id
        );
    }
    Ok(())
}

fn handle_toggle(ctx: &AppContext, args: &ToggleArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let sessions = tracker.sessions().list()?;
    let session = require_session(&sessions, &args.session)?;
    let set = require_set(session, &args.set)?;
    let entry = entry_for_set(&session.entries, set.id)
        .ok_or_else(|| anyhow::anyhow!("Set '{}' not found", args.set))?;

    let now = tracker.now();
    let toggled = toggle_done(set, now);
    let entries = update_entry(&session.entries, entry.id, |entry| {
        update_set(entry, set.id, |_| toggled.clone())
    });
    tracker
        .sessions()
        .update(session.id, SessionPatch::new().entries(entries))?;

    if ctx.json() {
        return print_json(&toggled);
    }
    if !ctx.quiet() {
        let state = if toggled.is_completed() { "done" } else { "not done" };
        println!("Set {} marked {}", toggled.id, state);
    }
    Ok(())
}

fn handle_finish(ctx: &AppContext, args: &FinishArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let sessions = tracker.sessions().list()?;
    let session = require_session(&sessions, &args.session)?;

    let patch = SessionPatch {
        duration_minutes: args.duration,
        effort: args.effort,
        notes: args.notes.clone(),
        ..SessionPatch::default()
    };
    let updated = tracker.sessions().update(session.id, patch)?;
    report_session(ctx, "Finished", &updated)
}
