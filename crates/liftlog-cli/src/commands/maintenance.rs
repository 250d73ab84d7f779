use liftlog_core::seed::seed_sample_data_once;

use crate::app::AppContext;
use crate::output::print_json;

pub fn handle_seed(ctx: &AppContext) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let seeded = seed_sample_data_once(&tracker)?;

    if ctx.json() {
        return print_json(&serde_json::json!({ "seeded": seeded }));
    }
    if !ctx.quiet() {
        if seeded {
            println!("Sample data written.");
        } else {
            println!("Sample data already present; nothing to do.");
        }
    }
    Ok(())
}

pub fn handle_migrate(ctx: &AppContext) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let report = tracker.sessions().migrate()?;

    if ctx.json() {
        return print_json(&serde_json::json!({
            "unchanged": report.unchanged,
            "upgraded": report.upgraded,
            "dropped": report.dropped,
        }));
    }
    if !ctx.quiet() {
        println!(
            "Sessions: {} unchanged, {} upgraded, {} dropped",
            report.unchanged, report.upgraded, report.dropped
        );
    }
    Ok(())
}
