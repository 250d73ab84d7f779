use liftlog_core::logic::lookup::filter_exercises_by_name;
use liftlog_core::types::{ExercisePatch, NewExercise};

use crate::app::AppContext;
use crate::cli::{ExerciseAddArgs, ExerciseCommand, ExerciseListArgs, ExerciseUpdateArgs, TargetArgs};
use crate::helpers::{require_exercise, short_id};
use crate::output::{print_json, print_table};

pub fn handle(ctx: &AppContext, command: &ExerciseCommand) -> anyhow::Result<()> {
    match command {
        ExerciseCommand::List(args) => handle_list(ctx, args),
        ExerciseCommand::Add(args) => handle_add(ctx, args),
        ExerciseCommand::Update(args) => handle_update(ctx, args),
        ExerciseCommand::Remove(args) => handle_remove(ctx, args),
    }
}

fn handle_list(ctx: &AppContext, args: &ExerciseListArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let filtered = filter_exercises_by_name(&exercises, args.search.as_deref().unwrap_or(""));

    if ctx.json() {
        return print_json(&filtered);
    }
    if filtered.is_empty() {
        if !ctx.quiet() {
            println!("No exercises found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = filtered
        .iter()
        .map(|exercise| {
            vec![
                short_id(exercise.id),
                exercise.name.clone(),
                exercise.muscle_group.clone().unwrap_or_default(),
                exercise.equipment.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["ID", "Name", "Muscle group", "Equipment"], &rows);
    Ok(())
}

fn handle_add(ctx: &AppContext, args: &ExerciseAddArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let mut input = NewExercise::new(args.name.clone());
    input.muscle_group = args.muscle_group.clone();
    input.equipment = args.equipment.clone();
    input.notes = args.notes.clone();

    let exercise = tracker.exercises().add(input)?;
    if ctx.json() {
        print_json(&exercise)
    } else {
        if !ctx.quiet() {
            println!("Added exercise '{}' ({})", exercise.name, exercise.id);
        }
        Ok(())
    }
}

fn handle_update(ctx: &AppContext, args: &ExerciseUpdateArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let target = require_exercise(&exercises, &args.exercise)?;

    let patch = ExercisePatch {
        name: args.name.clone(),
        muscle_group: args.muscle_group.clone(),
        equipment: args.equipment.clone(),
        notes: args.notes.clone(),
    };
    let exercise = tracker.exercises().update(target.id, patch)?;
    if ctx.json() {
        print_json(&exercise)
    } else {
        if !ctx.quiet() {
            println!("Updated exercise '{}'", exercise.name);
        }
        Ok(())
    }
}

fn handle_remove(ctx: &AppContext, args: &TargetArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let target = require_exercise(&exercises, &args.target)?;

    let removed = tracker.exercises().remove(target.id)?;
    if ctx.json() {
        print_json(&serde_json::json!({ "id": target.id, "removed": removed }))
    } else {
        if !ctx.quiet() {
            println!("Removed exercise '{}'", target.name);
        }
        Ok(())
    }
}
