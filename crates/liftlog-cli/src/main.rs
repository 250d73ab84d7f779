//! Liftlog CLI - a local-first strength training log
//!
//! Thin command-line surface over `liftlog-core`: each subcommand maps to
//! repository and logic calls and prints a table, plain text or JSON.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::config::load_config;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::Completions(args) = &cli.command {
        return commands::misc::handle_completions(args.shell);
    }

    let config = load_config()?;
    logging::init(&config.logging.level);
    let ctx = AppContext::new(cli, config);

    match &cli.command {
        Commands::Exercise(command) => commands::exercises::handle(&ctx, command),
        Commands::Routine(command) => commands::routines::handle(&ctx, command),
        Commands::Workout(command) => commands::workout::handle(&ctx, command),
        Commands::History(command) => commands::history::handle(&ctx, command),
        Commands::Progress(args) => commands::progress::handle_progress(&ctx, args),
        Commands::Seed => commands::maintenance::handle_seed(&ctx),
        Commands::Migrate => commands::maintenance::handle_migrate(&ctx),
        Commands::Completions(args) => commands::misc::handle_completions(args.shell),
    }
}
