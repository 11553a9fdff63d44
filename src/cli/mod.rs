// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `run`  — invokes the trainer on every matching file
//   2. `list` — previews the batch without running anything
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ListArgs, RunArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "train-all",
    version = "0.1.0",
    about = "Run a trainer over every .training file in a directory, capturing stdout per file."
)]
pub struct Cli {
    /// Only report errors, not per-file progress.
    /// Captured trainer output is unaffected.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The subcommand to run (run or list)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args)  => Self::run_batch(args),
            Commands::List(args) => Self::run_list(args),
        }
    }

    /// Handles the `run` subcommand.
    /// Converts CLI args into a BatchConfig and hands off to Layer 2.
    fn run_batch(args: RunArgs) -> Result<()> {
        use crate::application::run_use_case::RunUseCase;

        tracing::info!("Starting batch over training files in: {}", args.dir);

        // Convert CLI args → application config (parses the failure mode)
        let use_case = RunUseCase::new(args.try_into()?);
        let summary  = use_case.execute()?;

        println!("Batch complete: {}.", summary);
        Ok(())
    }

    /// Handles the `list` subcommand.
    /// Prints one planned invocation per line, or a JSON array.
    fn run_list(args: ListArgs) -> Result<()> {
        use crate::application::list_use_case::ListUseCase;

        let json    = args.json;
        let trainer = args.trainer.clone();

        let use_case = ListUseCase::new(args.into());
        let planned  = use_case.execute()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&planned)?);
        } else {
            // Same shape as the shell command each run replaces.
            for run in &planned {
                println!("{} {} > {}", trainer, run.input, run.output);
            }
            println!("{} training file(s) matched.", planned.len());
        }
        Ok(())
    }
}
