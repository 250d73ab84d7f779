use liftlog_core::logic::compute_progress_series;
use liftlog_core::logic::progress::format_metric_value;

use crate::app::AppContext;
use crate::cli::ProgressArgs;
use crate::helpers::require_exercise;
use crate::output::{print_json, print_table};

pub fn handle_progress(ctx: &AppContext, args: &ProgressArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let exercises = tracker.exercises().list()?;
    let exercise = require_exercise(&exercises, &args.exercise)?;
    let sessions = tracker.sessions().list()?;

    let series = compute_progress_series(
        &sessions,
        exercise.id,
        args.metric,
        args.range,
        tracker.now(),
    );

    if ctx.json() {
        return print_json(&serde_json::json!({
            "exerciseId": exercise.id,
            "metric": args.metric,
            "range": args.range,
            "points": series,
        }));
    }
    if series.is_empty() {
        if !ctx.quiet() {
            println!("No data for {} in range {}.", exercise.name, args.range);
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{} - {} ({})", exercise.name, args.metric, args.range);
    }
    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|point| {
            vec![
                point.date.format("%Y-%m-%d").to_string(),
                format_metric_value(args.metric, point.value),
            ]
        })
        .collect();
    print_table(&["Date", "Value"], &rows);
    Ok(())
}
