// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// the application layer can swap implementations without
// changing the orchestration code. For example:
//   - DirectoryScanner implements TrainingSource
//   - A future ManifestSource could read filenames from a list
//   - The application layer only sees TrainingSource
//     and works with both without any changes
//
// The same goes for Trainer: the real implementation spawns
// a child process, while tests substitute a fake that records
// which files it was asked to train.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::outcome::TrainOutcome;
use crate::domain::training_file::TrainingFile;

// ─── TrainingSource ───────────────────────────────────────────────────────────
/// Any component that can produce the set of training files for a run.
///
/// Implementations:
///   - DirectoryScanner → one directory listing, filtered by suffix
pub trait TrainingSource {
    /// List every training file visible to this source, in the
    /// order the batch should process them. Fails only when the
    /// source itself cannot be read (the one fatal condition).
    fn list_all(&self) -> Result<Vec<TrainingFile>>;
}

// ─── Trainer ──────────────────────────────────────────────────────────────────
/// Any component that can run the trainer once over a training file.
///
/// Implementations:
///   - ProcessTrainer → spawns the external executable
///   - (tests) fakes that record calls or simulate failures
pub trait Trainer {
    /// Run one invocation to completion and report its outcome.
    /// An Err means the invocation could not even start (missing
    /// executable, unwritable output file); a nonzero exit is an
    /// Ok outcome with success == false.
    fn train(&self, file: &TrainingFile) -> Result<TrainOutcome>;
}
