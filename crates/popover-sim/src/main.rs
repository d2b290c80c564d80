#![warn(missing_docs)]

//! Entry point for the `popover-sim` binary.

mod cli;
mod error;
mod place;
mod scenario;
mod sim;

use std::process;

use clap::Parser;
use tracing::error;

use crate::{
    cli::{Cli, Commands, RunArgs},
    error::Result,
    scenario::Scenario,
    sim::Simulation,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    logging::init(&log.spec());

    match command {
        Commands::Run(args) => replay(&args),
        Commands::Place(args) => place::run(&args),
    }
}

/// Replay a scenario file and print one line per entry.
fn replay(args: &RunArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    for entry in Simulation::run(&scenario) {
        println!("{entry}");
    }
    Ok(())
}
