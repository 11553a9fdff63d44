// ============================================================
// Layer 6 — Output Store
// ============================================================
// Owns the on-disk layout of captured trainer output.
//
// Layout:
//   <batch dir>/
//     iris.training           ← input (never touched)
//     iris.training.output    ← stdout of the trainer run
//     wine.training
//     wine.training.output
//
// One output file per training file, always in the same
// directory as its input. The filename itself is the domain
// rule (TrainingFile::output_name); this store decides WHERE
// the file lives and HOW it is opened: an existing file of
// that name is truncated, never appended to, so every run
// starts from an empty capture.
//
// The store hands the opened File back to the execution layer,
// which wires it up as the child's stdout. The file is created
// BEFORE the child is spawned: if the trainer turns out to be
// missing, the stale output from a previous run is still gone,
// the same way a shell redirection truncates before the command
// lookup happens.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::domain::training_file::TrainingFile;

/// Creates and names the per-file stdout captures of a batch.
pub struct OutputStore {
    /// The batch directory all output files land in
    dir: PathBuf,
}

impl OutputStore {
    /// Create a new OutputStore rooted at the batch directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Full path of the output file for one training file
    pub fn path_for(&self, file: &TrainingFile) -> PathBuf {
        self.dir.join(file.output_name())
    }

    /// Create (truncating) the output file for one training file.
    /// Returns the open handle so the caller can attach it to a
    /// child process as stdout.
    pub fn create(&self, file: &TrainingFile) -> Result<File> {
        let path = self.path_for(file);

        let handle = File::create(&path).with_context(|| {
            format!("Cannot create output file '{}'", path.display())
        })?;

        tracing::debug!("Truncated output file '{}'", path.display());
        Ok(handle)
    }
}
