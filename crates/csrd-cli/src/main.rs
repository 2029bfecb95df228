//! # csrd CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; the repeatable `-v` flag
//! maps onto a tracing `EnvFilter` so verbosity is uniform across
//! subcommands.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use csrd_cli::classify::{run_classify, ClassifyArgs};
use csrd_cli::determine::{run_determine, DetermineArgs};
use csrd_cli::resolve::{run_resolve, ResolveArgs};
use csrd_cli::validate::{run_validate, ValidateArgs};

/// CSRD Stack CLI
///
/// Operator interface for the compliance determination pipeline: validate
/// knowledge snapshots, classify companies into reporting phases, resolve
/// obligation lists, and run full determinations over intake files.
#[derive(Parser, Debug)]
#[command(name = "csrd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a knowledge snapshot YAML file (defaults to the builtin set).
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the knowledge snapshot and print its digest.
    Validate(ValidateArgs),

    /// Classify a company into its reporting phase from size figures.
    Classify(ClassifyArgs),

    /// Resolve the obligation list for a phase and reporting year.
    Resolve(ResolveArgs),

    /// Run a full compliance determination over a JSON intake file.
    Determine(DetermineArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("csrd CLI starting");

    let snapshot_path = cli.snapshot.as_deref();
    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, snapshot_path),
        Commands::Classify(args) => run_classify(&args, snapshot_path),
        Commands::Resolve(args) => run_resolve(&args, snapshot_path),
        Commands::Determine(args) => run_determine(&args, snapshot_path),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
