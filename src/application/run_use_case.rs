// ============================================================
// Layer 2 — RunUseCase
// ============================================================
// Orchestrates one whole batch run in order:
//
//   Step 1: Scan the batch directory     (Layer 4 - data)
//   Step 2: Build the process trainer    (Layer 5 - exec)
//   Step 3: Invoke per file, apply the
//           failure policy, tally counts (this layer)
//
// The loop is strictly sequential: each invocation blocks until
// the child exits before the next file is touched. Invocation
// order is the scan order (raw directory order unless sorting
// was requested).
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use serde::Serialize;

use crate::data::scanner::DirectoryScanner;
use crate::domain::outcome::RunSummary;
use crate::domain::policy::FailureMode;
use crate::domain::training_file::TrainingFile;
use crate::domain::traits::{Trainer, TrainingSource};
use crate::exec::process::ProcessTrainer;

// ─── Batch Configuration ─────────────────────────────────────────────────────
// Everything one run needs. Serialisable so the effective config
// can be dumped as JSON for debugging a surprising batch; nothing
// ever reads a config back in, so Serialize is the only derive.
#[derive(Debug, Clone, Serialize)]
pub struct BatchConfig {
    pub dir:      String,
    pub trainer:  String,
    pub suffix:   String,
    pub sort:     bool,
    pub on_error: FailureMode,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            dir:      ".".to_string(),
            trainer:  "../trainMSVMMajdataset".to_string(),
            suffix:   ".training".to_string(),
            sort:     false,
            on_error: FailureMode::Ignore,
        }
    }
}

// ─── RunUseCase ──────────────────────────────────────────────────────────────
// Owns the config and runs the full batch end to end.
pub struct RunUseCase {
    config: BatchConfig,
}

impl RunUseCase {
    /// Create a new RunUseCase with the given configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Execute the full batch and return the aggregate counters
    pub fn execute(&self) -> Result<RunSummary> {
        let cfg = &self.config;
        tracing::debug!("Effective config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Scan the batch directory ─────────────────────────────────
        // One listing, filtered by suffix. An unreadable directory
        // aborts here; nothing has been spawned or written yet.
        let scanner = DirectoryScanner::new(&cfg.dir, &cfg.suffix, cfg.sort);
        let files   = scanner.list_all()?;
        tracing::info!(
            "Matched {} training file(s) in '{}'",
            files.len(),
            cfg.dir
        );

        // ── Step 2: Build the process trainer ────────────────────────────────
        let trainer = ProcessTrainer::new(&cfg.dir, &cfg.trainer);

        // ── Step 3: Invoke per file ──────────────────────────────────────────
        self.run_all(&files, &trainer)
    }

    /// The list-filter-invoke loop, generic over the Trainer seam
    /// so tests can substitute a fake.
    fn run_all(&self, files: &[TrainingFile], trainer: &dyn Trainer) -> Result<RunSummary> {
        let mut summary = RunSummary {
            matched: files.len(),
            ..RunSummary::default()
        };

        for file in files {
            tracing::info!("Training '{}' > '{}'", file.name, file.output_name());

            match trainer.train(file) {
                Ok(outcome) if outcome.success => {
                    tracing::info!(
                        "Finished '{}' in {} ms, stdout in '{}'",
                        outcome.file,
                        outcome.duration_ms,
                        outcome.output
                    );
                    summary.record(true);
                }
                Ok(outcome) => {
                    summary.record(false);
                    let what = match outcome.exit_code {
                        Some(code) => format!("trainer exited with status {}", code),
                        None       => "trainer was killed by a signal".to_string(),
                    };
                    self.handle_failure(&file.name, &what)?;
                }
                Err(e) => {
                    summary.record(false);
                    // {:#} keeps the whole context chain on one log line
                    self.handle_failure(&file.name, &format!("{:#}", e))?;
                }
            }
        }

        Ok(summary)
    }

    /// Apply the configured failure policy to one failed invocation.
    /// Only Fail mode turns a per-file failure into an Err; the other
    /// modes always let the loop continue.
    fn handle_failure(&self, file: &str, what: &str) -> Result<()> {
        match self.config.on_error {
            FailureMode::Ignore => {
                tracing::debug!("Ignoring failure on '{}': {}", file, what);
            }
            FailureMode::Warn => {
                tracing::warn!("Failed on '{}': {}", file, what);
            }
            FailureMode::Fail => {
                bail!("Aborting batch: failed on '{}': {}", file, what);
            }
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// End-to-end tests drive real child processes through tiny standard
// commands (cat, false); the trait-seam test substitutes a fake
// Trainer to pin the policy logic without spawning anything.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::TrainOutcome;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir, trainer: &str) -> BatchConfig {
        BatchConfig {
            dir:     dir.path().to_str().unwrap().to_string(),
            trainer: trainer.to_string(),
            sort:    true,
            ..BatchConfig::default()
        }
    }

    fn dir_listing(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_str().unwrap().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_config_serializes_for_the_debug_dump() {
        let json = serde_json::to_string(&BatchConfig::default()).unwrap();
        assert!(json.contains("\"trainer\":\"../trainMSVMMajdataset\""));
        assert!(json.contains("\"suffix\":\".training\""));
        assert!(json.contains("\"on_error\":\"ignore\""));
    }

    #[test]
    fn test_zero_matches_means_zero_invocations() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a training file").unwrap();

        // The trainer does not exist; with zero matches that must not matter.
        let summary = RunUseCase::new(config(&dir, "./no-such-trainer"))
            .execute()
            .unwrap();

        assert_eq!(summary, RunSummary { matched: 0, trained: 0, failed: 0 });
        assert_eq!(dir_listing(&dir), vec!["notes.txt"]);
    }

    #[test]
    fn test_processes_exactly_the_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.training"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.txt"), "bystander\n").unwrap();
        fs::write(dir.path().join("c.training"), "gamma\n").unwrap();

        let summary = RunUseCase::new(config(&dir, "cat")).execute().unwrap();

        assert_eq!(summary, RunSummary { matched: 2, trained: 2, failed: 0 });
        assert_eq!(
            fs::read_to_string(dir.path().join("a.training.output")).unwrap(),
            "alpha\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("c.training.output")).unwrap(),
            "gamma\n"
        );
        // The bystander got no sidecar file.
        assert!(!dir.path().join("b.txt.output").exists());
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.training"), "fresh\n").unwrap();
        fs::write(
            dir.path().join("a.training.output"),
            "leftover from an earlier, much longer run\n",
        )
        .unwrap();

        RunUseCase::new(config(&dir, "cat")).execute().unwrap();

        // Truncated and rewritten, not appended.
        assert_eq!(
            fs::read_to_string(dir.path().join("a.training.output")).unwrap(),
            "fresh\n"
        );
    }

    #[test]
    fn test_rerun_is_idempotent_on_the_file_set() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.training"), "alpha\n").unwrap();

        let use_case = RunUseCase::new(config(&dir, "cat"));
        use_case.execute().unwrap();
        let first = dir_listing(&dir);
        use_case.execute().unwrap();

        // Output files do not match the input suffix, so a rerun
        // produces the same set instead of sidecars-of-sidecars.
        assert_eq!(dir_listing(&dir), first);
        assert_eq!(first, vec!["a.training", "a.training.output"]);
    }

    #[test]
    fn test_ignore_mode_swallows_failures() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.training"), "").unwrap();

        // `false` exits nonzero and writes nothing.
        let summary = RunUseCase::new(config(&dir, "false")).execute().unwrap();

        assert_eq!(summary, RunSummary { matched: 1, trained: 0, failed: 1 });
        // The truncated capture still exists, it is just empty.
        let capture = fs::read(dir.path().join("bad.training.output")).unwrap();
        assert!(capture.is_empty());
    }

    #[test]
    fn test_warn_mode_runs_the_whole_batch() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.training"), "").unwrap();
        fs::write(dir.path().join("c.training"), "").unwrap();

        let mut cfg = config(&dir, "false");
        cfg.on_error = FailureMode::Warn;

        let summary = RunUseCase::new(cfg).execute().unwrap();
        assert_eq!(summary, RunSummary { matched: 2, trained: 0, failed: 2 });
    }

    #[test]
    fn test_fail_mode_stops_at_the_first_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.training"), "").unwrap();
        fs::write(dir.path().join("c.training"), "").unwrap();

        let mut cfg = config(&dir, "false");
        cfg.on_error = FailureMode::Fail;

        let err = RunUseCase::new(cfg).execute().unwrap_err();
        assert!(err.to_string().contains("a.training"));

        // Sorted order puts a.training first; its capture was created
        // before the abort, c.training was never reached.
        assert!(dir.path().join("a.training.output").exists());
        assert!(!dir.path().join("c.training.output").exists());
    }

    // ─── Trait-seam test ─────────────────────────────────────────────────────

    struct FakeTrainer {
        calls: RefCell<Vec<String>>,
    }

    impl Trainer for FakeTrainer {
        fn train(&self, file: &TrainingFile) -> Result<TrainOutcome> {
            self.calls.borrow_mut().push(file.name.clone());
            Ok(TrainOutcome {
                file:        file.name.clone(),
                output:      file.output_name(),
                exit_code:   Some(1),
                success:     false,
                duration_ms: 0,
            })
        }
    }

    #[test]
    fn test_fail_mode_invokes_nothing_after_the_failure() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir, "unused");
        cfg.on_error = FailureMode::Fail;

        let fake  = FakeTrainer { calls: RefCell::new(Vec::new()) };
        let files = vec![
            TrainingFile::new("a.training"),
            TrainingFile::new("c.training"),
        ];

        let result = RunUseCase::new(cfg).run_all(&files, &fake);

        assert!(result.is_err());
        assert_eq!(*fake.calls.borrow(), vec!["a.training"]);
    }
}
