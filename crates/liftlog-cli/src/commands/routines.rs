use liftlog_core::logic::defaults::format_planned_target;
use liftlog_core::logic::lookup::exercise_name;
use liftlog_core::logic::order::{insert_at, push, sort_by_order};
use liftlog_core::types::{DayTemplate, NewRoutine, PlannedExercise, RoutinePatch};

use crate::app::AppContext;
use crate::cli::{AddDayArgs, PlanArgs, RoutineAddArgs, RoutineCommand, TargetArgs};
use crate::helpers::{require_day, require_exercise, require_routine, short_id};
use crate::output::{print_json, print_table};

pub fn handle(ctx: &AppContext, command: &RoutineCommand) -> anyhow::Result<()> {
    match command {
        RoutineCommand::List => handle_list(ctx),
        RoutineCommand::Show(args) => handle_show(ctx, args),
        RoutineCommand::Add(args) => handle_add(ctx, args),
        RoutineCommand::Remove(args) => handle_remove(ctx, args),
        RoutineCommand::AddDay(args) => handle_add_day(ctx, args),
        RoutineCommand::Plan(args) => handle_plan(ctx, args),
    }
}

fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let routines = tracker.routines().list()?;

    if ctx.json() {
        return print_json(&routines);
    }
    if routines.is_empty() {
        if !ctx.quiet() {
            println!("No routines found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = routines
        .iter()
        .map(|routine| {
            let days: Vec<String> = sort_by_order(&routine.days)
                .into_iter()
                .map(|day| day.name)
                .collect();
            vec![short_id(routine.id), routine.name.clone(), days.join(", ")]
        })
        .collect();
    print_table(&["ID", "Name", "Days"], &rows);
    Ok(())
}

fn handle_show(ctx: &AppContext, args: &TargetArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let routines = tracker.routines().list()?;
    let routine = require_routine(&routines, &args.target)?;

    if ctx.json() {
        return print_json(routine);
    }

    let exercises = tracker.exercises().list()?;
    println!("{} ({})", routine.name, routine.id);
    if let Some(notes) = routine.notes.as_deref() {
        println!("{}", notes);
    }
    for day in sort_by_order(&routine.days) {
        println!();
        println!("{}. {} ({})", day.order, day.name, short_id(day.id));
        if day.planned_exercises.is_empty() {
            println!("   (no exercises planned)");
        }
        for planned in sort_by_order(&day.planned_exercises) {
            println!(
                "   - {}: {}",
                exercise_name(&exercises, planned.exercise_id),
                format_planned_target(&planned.target())
            );
        }
    }
    Ok(())
}

fn handle_add(ctx: &AppContext, args: &RoutineAddArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let mut input = NewRoutine::new(args.name.clone());
    input.notes = args.notes.clone();

    let routine = tracker.routines().add(input)?;
    if ctx.json() {
        print_json(&routine)
    } else {
        if !ctx.quiet() {
            println!("Added routine '{}' ({})", routine.name, routine.id);
        }
        Ok(())
    }
}

fn handle_remove(ctx: &AppContext, args: &TargetArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let routines = tracker.routines().list()?;
    let routine = require_routine(&routines, &args.target)?;

    let removed = tracker.routines().remove(routine.id)?;
    if ctx.json() {
        print_json(&serde_json::json!({ "id": routine.id, "removed": removed }))
    } else {
        if !ctx.quiet() {
            println!("Removed routine '{}'", routine.name);
        }
        Ok(())
    }
}

fn handle_add_day(ctx: &AppContext, args: &AddDayArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("Day name cannot be empty");
    }

    let tracker = ctx.open_tracker()?;
    let routines = tracker.routines().list()?;
    let routine = require_routine(&routines, &args.routine)?;

    let day = DayTemplate::new(name);
    let day_id = day.id;
    let days = match args.position {
        Some(position) => insert_at(&routine.days, position.saturating_sub(1), day),
        None => push(&routine.days, day),
    };
    let updated = tracker
        .routines()
        .update(routine.id, RoutinePatch::new().days(days))?;

    if ctx.json() {
        print_json(&updated)
    } else {
        if !ctx.quiet() {
            println!("Added day '{}' to '{}' ({})", name, updated.name, day_id);
        }
        Ok(())
    }
}

fn handle_plan(ctx: &AppContext, args: &PlanArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let exercise = require_exercise(&exercises, &args.exercise)?;
    let routines = tracker.routines().list()?;
    let routine = require_routine(&routines, &args.routine)?;
    let day = require_day(std::slice::from_ref(routine), &args.day)?.1;

    let reps = args.reps.trim();
    if reps.is_empty() {
        anyhow::bail!("Target reps cannot be empty");
    }
    let mut planned = PlannedExercise::new(exercise.id, args.sets, reps);
    planned.target_weight = args.weight;

    let days: Vec<DayTemplate> = routine
        .days
        .iter()
        .map(|candidate| {
            if candidate.id == day.id {
                DayTemplate {
                    planned_exercises: push(&candidate.planned_exercises, planned.clone()),
                    ..candidate.clone()
                }
            } else {
                candidate.clone()
            }
        })
        .collect();
    let updated = tracker
        .routines()
        .update(routine.id, RoutinePatch::new().days(days))?;

    if ctx.json() {
        print_json(&updated)
    } else {
        if !ctx.quiet() {
            println!(
                "Planned {} on {}: {}",
                exercise.name,
                day.name,
                format_planned_target(&planned.target())
            );
        }
        Ok(())
    }
}
