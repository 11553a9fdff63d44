// ============================================================
// Layer 3 — Invocation Outcomes
// ============================================================
// Value types describing what happened during a batch run:
//
//   TrainOutcome — one finished trainer invocation
//                  (exit status, wall-clock duration)
//   RunSummary   — aggregate counters for a whole batch
//
// These are produced by the execution layer and consumed by
// the application layer, which decides what to do with a
// failure (ignore it, warn, or abort the batch).
//
// Reference: Rust Book §5 (Structs)

use std::fmt;

/// The result of a single trainer invocation.
///
/// The child's stdout never appears here: it has already been
/// streamed into the output file by the time the outcome exists.
/// Stderr is inherited by the runner's terminal and is not
/// captured at all.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// Bare filename of the training file that was processed
    pub file: String,

    /// Filename of the output file that captured stdout
    pub output: String,

    /// The child's exit code, or None if it died from a signal
    pub exit_code: Option<i32>,

    /// True when the child exited with status zero
    pub success: bool,

    /// Wall-clock time of the invocation in milliseconds
    pub duration_ms: u64,
}

/// Aggregate counters for one batch run.
///
/// matched = trained + failed always holds: every matched file
/// yields exactly one invocation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of training files the scan matched
    pub matched: usize,

    /// Invocations that completed with exit status zero
    pub trained: usize,

    /// Invocations that failed to spawn or exited nonzero
    pub failed: usize,
}

impl RunSummary {
    /// Record one finished invocation in the counters
    pub fn record(&mut self, success: bool) {
        if success {
            self.trained += 1;
        } else {
            self.failed += 1;
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trained, {} failed ({} matched)",
            self.trained, self.failed, self.matched
        )
    }
}
