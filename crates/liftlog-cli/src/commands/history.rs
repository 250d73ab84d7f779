use liftlog_core::logic::history::sessions_newest_first;
use liftlog_core::logic::lookup::exercise_name;
use liftlog_core::logic::{exercise_totals, session_total_volume};

use crate::app::AppContext;
use crate::cli::{HistoryCommand, HistoryListArgs, SessionArgs};
use crate::helpers::{require_session, short_id};
use crate::output::{format_weight, print_json, print_table};

pub fn handle(ctx: &AppContext, command: &HistoryCommand) -> anyhow::Result<()> {
    match command {
        HistoryCommand::List(args) => handle_list(ctx, args),
        HistoryCommand::Show(args) => handle_show(ctx, args),
        HistoryCommand::Remove(args) => handle_remove(ctx, args),
    }
}

fn handle_list(ctx: &AppContext, args: &HistoryListArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let mut sessions = sessions_newest_first(&tracker.sessions().list()?);
    if let Some(limit) = args.limit {
        sessions.truncate(limit);
    }

    if ctx.json() {
        return print_json(&sessions);
    }
    if sessions.is_empty() {
        if !ctx.quiet() {
            println!("No sessions found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = sessions
        .iter()
        .map(|session| {
            let sets: usize = session.entries.iter().map(|entry| entry.sets.len()).sum();
            vec![
                short_id(session.id),
                session.date.format("%Y-%m-%d %H:%M").to_string(),
                session.name.clone(),
                session.entries.len().to_string(),
                sets.to_string(),
                format_weight(session_total_volume(session)),
            ]
        })
        .collect();
    print_table(&["ID", "Date", "Name", "Exercises", "Sets", "Volume"], &rows);
    Ok(())
}

fn handle_show(ctx: &AppContext, args: &SessionArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let sessions = tracker.sessions().list()?;
    let session = require_session(&sessions, &args.session)?;
    let exercises = tracker.exercises().list()?;

    if ctx.json() {
        let entries: Vec<serde_json::Value> = session
            .entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "entry": entry,
                    "exerciseName": exercise_name(&exercises, entry.exercise_id),
                    "totals": exercise_totals(entry),
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "session": session,
            "entries": entries,
            "totalVolume": session_total_volume(session),
        }));
    }

    println!("{} ({})", session.name, session.id);
    println!("Date: {}", session.date.to_rfc3339());
    if let Some(minutes) = session.duration_minutes {
        println!("Duration: {} min", minutes);
    }
    if let Some(effort) = session.effort {
        println!("Effort: {}/10", effort);
    }
    if let Some(notes) = session.notes.as_deref() {
        println!("Notes: {}", notes);
    }

    for entry in &session.entries {
        let totals = exercise_totals(entry);
        println!();
        println!(
            "{}: {} sets, {} reps, {} volume",
            exercise_name(&exercises, entry.exercise_id),
            totals.total_sets,
            totals.total_reps,
            format_weight(totals.total_volume)
        );
        let rows: Vec<Vec<String>> = entry
            .sets
            .iter()
            .enumerate()
            .map(|(index, set)| {
                vec![
                    (index + 1).to_string(),
                    short_id(set.id),
                    set.reps.to_string(),
                    format_weight(set.weight),
                    (if set.is_completed() { "x" } else { "" }).to_string(),
                ]
            })
            .collect();
        if !rows.is_empty() {
            print_table(&["#", "ID", "Reps", "Weight", "Done"], &rows);
        }
    }
    println!();
    println!("Total volume: {}", format_weight(session_total_volume(session)));
    Ok(())
}

fn handle_remove(ctx: &AppContext, args: &SessionArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let sessions = tracker.sessions().list()?;
    let session = require_session(&sessions, &args.session)?;

    let removed = tracker.sessions().remove(session.id)?;
    if ctx.json() {
        print_json(&serde_json::json!({ "id": session.id, "removed": removed }))
    } else {
        if !ctx.quiet() {
            println!("Removed session '{}' ({})", session.name, session.id);
        }
        Ok(())
    }
}
