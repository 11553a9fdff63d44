// ============================================================
// Layer 5 — Process Trainer
// ============================================================
// Runs the external trainer executable, once per training file.
//
// The invocation contract, per file:
//
//   1. The output file "<input>.output" is created (truncating)
//      BEFORE the spawn. A missing trainer therefore still
//      leaves an empty output file behind, the same observable
//      state a shell "trainer input > input.output" produces
//      when the redirection succeeds and the command lookup
//      fails.
//   2. The child is spawned from a structured argument vector:
//      the program plus exactly ONE argument, the bare input
//      filename. No shell is involved, so filenames containing
//      shell metacharacters are passed through untouched and
//      cannot inject commands.
//   3. The child's working directory is the batch directory,
//      which is what makes the bare filename argument resolve.
//   4. stdout goes to the output file. stderr and stdin are
//      inherited from the runner, never redirected.
//   5. The runner blocks until the child exits. There is no
//      timeout: a hung trainer hangs the batch.
//
// Program path resolution follows shell conventions:
//   - absolute paths are used as-is
//   - a bare command name ("cat") goes through PATH
//   - a relative path with separators ("../trainMSVMMajdataset")
//     resolves against the batch directory, absolutized first:
//     exec looks a relative program up from the child's working
//     directory, which current_dir has already moved into the
//     batch directory, so a still-relative join would get
//     anchored a second time
//
// Reference: std::process documentation
//            Rust Book §12 (Building a CLI Program)

use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    time::Instant,
};

use crate::domain::outcome::TrainOutcome;
use crate::domain::training_file::TrainingFile;
use crate::domain::traits::Trainer;
use crate::infra::output::OutputStore;

/// Invokes the configured trainer executable as a child process.
/// Implements the Trainer trait from Layer 3.
pub struct ProcessTrainer {
    /// The batch directory; working directory of every child
    dir: String,
    /// The trainer executable: path or bare command name
    program: String,
    /// Creates the per-file stdout capture
    outputs: OutputStore,
}

impl ProcessTrainer {
    /// Create a new ProcessTrainer for one batch directory
    pub fn new(dir: impl Into<String>, program: impl Into<String>) -> Self {
        let dir = dir.into();
        let outputs = OutputStore::new(&dir);
        Self {
            dir,
            program: program.into(),
            outputs,
        }
    }

    /// Resolve the configured program to what Command should exec.
    ///
    /// Relative paths are anchored to the batch directory rather
    /// than the runner's own working directory, so "--dir data
    /// --trainer ../trainMSVMMajdataset" finds the executable one
    /// level above data/. The anchor is made absolute first: the
    /// child execs after chdir'ing into the batch directory, so a
    /// still-relative program would be looked up from there again
    /// (data/data/../trainMSVMMajdataset instead of one level up).
    /// A bare name stays bare and gets the normal PATH lookup.
    fn resolve_program(&self) -> Result<PathBuf> {
        let program = Path::new(&self.program);

        if program.is_absolute() || program.components().count() == 1 {
            return Ok(program.to_path_buf());
        }

        let dir = fs::canonicalize(&self.dir)
            .or_else(|_| env::current_dir().map(|cwd| cwd.join(&self.dir)))
            .with_context(|| {
                format!("Cannot resolve batch directory '{}'", self.dir)
            })?;

        Ok(dir.join(program))
    }
}

impl Trainer for ProcessTrainer {
    fn train(&self, file: &TrainingFile) -> Result<TrainOutcome> {
        let started = Instant::now();

        // Truncate the capture first; see the invocation contract above.
        let capture = self.outputs.create(file)?;
        let program = self.resolve_program()?;

        let status = Command::new(&program)
            .arg(&file.name)
            .current_dir(&self.dir)
            .stdout(Stdio::from(capture))
            .status()
            .with_context(|| {
                format!(
                    "Cannot run trainer '{}' on '{}'",
                    program.display(),
                    file.name
                )
            })?;

        Ok(TrainOutcome {
            file:        file.name.clone(),
            output:      file.output_name(),
            exit_code:   status.code(),
            success:     status.success(),
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}
