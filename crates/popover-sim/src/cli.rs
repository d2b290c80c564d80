//! Command-line interface definitions for popover-sim.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `popover-sim` binary.
#[derive(Parser, Debug)]
#[command(
    name = "popover-sim",
    about = "Replay anchored popover scenarios without a display",
    version
)]
pub struct Cli {
    /// Logging controls shared across binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a RON scenario file and print the event log.
    Run(RunArgs),
    /// Place a single popover and print the resulting style.
    Place(PlaceArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scenario file in RON syntax.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,
}

/// Arguments for the `place` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlaceArgs {
    /// Anchor rectangle as `top,left,width,height`.
    #[arg(long, value_parser = parse_numbers::<4>, value_name = "T,L,W,H")]
    pub anchor: [f64; 4],

    /// Target size as `width,height`.
    #[arg(long, value_parser = parse_numbers::<2>, value_name = "W,H")]
    pub target: [f64; 2],

    /// Viewport size as `width,height`.
    #[arg(long, value_parser = parse_numbers::<2>, value_name = "W,H", default_value = "800,600")]
    pub viewport: [f64; 2],

    /// Optional popover configuration file (RON).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Parse exactly `N` comma-separated numbers.
fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N], String> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<_, _>>()?;
    <[f64; N]>::try_from(parts)
        .map_err(|got| format!("expected {N} comma-separated numbers, got {}", got.len()))
}
