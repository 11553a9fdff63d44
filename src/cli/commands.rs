// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `run` and `list`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::run_use_case::BatchConfig;
use crate::domain::policy::FailureMode;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the trainer once per matching file in the batch directory
    Run(RunArgs),

    /// Preview which files would be trained, without running anything
    List(ListArgs),
}

/// All arguments for the `run` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory containing the training files to process
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Trainer executable to run once per file.
    /// Bare names are looked up on PATH; relative paths with a
    /// separator resolve against the batch directory.
    #[arg(long, default_value = "../trainMSVMMajdataset")]
    pub trainer: String,

    /// Filename suffix that marks an entry as a training file
    #[arg(long, default_value = ".training")]
    pub suffix: String,

    /// Process files in lexicographic filename order instead of
    /// whatever order the directory yields
    #[arg(long)]
    pub sort: bool,

    /// What a failed invocation does to the batch:
    /// ignore (keep going silently), warn (keep going, log it),
    /// or fail (abort the batch)
    #[arg(long, default_value = "ignore")]
    pub on_error: String,
}

/// Convert CLI RunArgs into the application-layer BatchConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types. Fallible because
/// --on-error arrives as free text and has to parse.
impl TryFrom<RunArgs> for BatchConfig {
    type Error = anyhow::Error;

    fn try_from(a: RunArgs) -> Result<Self, Self::Error> {
        Ok(BatchConfig {
            dir:      a.dir,
            trainer:  a.trainer,
            suffix:   a.suffix,
            sort:     a.sort,
            on_error: a.on_error.parse()?,
        })
    }
}

/// All arguments for the `list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing the training files to preview
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Trainer executable the preview lines name
    #[arg(long, default_value = "../trainMSVMMajdataset")]
    pub trainer: String,

    /// Filename suffix that marks an entry as a training file
    #[arg(long, default_value = ".training")]
    pub suffix: String,

    /// Preview in lexicographic filename order
    #[arg(long)]
    pub sort: bool,

    /// Emit the preview as a JSON array instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// `list` never invokes anything, so the failure mode is moot;
/// Ignore keeps the config honest about that.
impl From<ListArgs> for BatchConfig {
    fn from(a: ListArgs) -> Self {
        BatchConfig {
            dir:      a.dir,
            trainer:  a.trainer,
            suffix:   a.suffix,
            sort:     a.sort,
            on_error: FailureMode::Ignore,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(on_error: &str) -> RunArgs {
        RunArgs {
            dir:      "batches".to_string(),
            trainer:  "./train".to_string(),
            suffix:   ".training".to_string(),
            sort:     true,
            on_error: on_error.to_string(),
        }
    }

    #[test]
    fn test_run_args_convert_to_config() {
        let config = BatchConfig::try_from(run_args("warn")).unwrap();
        assert_eq!(config.dir, "batches");
        assert_eq!(config.trainer, "./train");
        assert!(config.sort);
        assert_eq!(config.on_error, FailureMode::Warn);
    }

    #[test]
    fn test_unknown_failure_mode_is_rejected_at_the_boundary() {
        let err = BatchConfig::try_from(run_args("explode")).unwrap_err();
        assert!(err.to_string().contains("explode"));
    }
}
