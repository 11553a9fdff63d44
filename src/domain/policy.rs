// ============================================================
// Layer 3 — Failure Policy
// ============================================================
// What the batch runner does when one invocation fails
// (trainer missing, output file unwritable, nonzero exit):
//
//   Ignore — swallow it and move on to the next file.
//            This is the default and matches the historical
//            best-effort behaviour of the batch: a broken run
//            leaves its (possibly empty) output file behind
//            and the rest of the batch still happens.
//   Warn   — log one warning per failed file, keep going.
//   Fail   — abort the whole batch on the first failure.
//
// The policy never applies to the directory listing itself:
// an unreadable batch directory always aborts the run.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Per-invocation failure handling mode, selected with --on-error.
/// CLI text comes in through FromStr; Serialize only feeds the
/// config debug dump, where the mode appears in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Swallow failures silently and continue (historical behaviour)
    Ignore,
    /// Log a warning per failure and continue
    Warn,
    /// Abort the batch on the first failure
    Fail,
}

impl FromStr for FailureMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn"   => Ok(Self::Warn),
            "fail"   => Ok(Self::Fail),
            other => Err(anyhow::anyhow!(
                "Unknown failure mode '{}' (expected ignore, warn, or fail)",
                other
            )),
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ignore => "ignore",
            Self::Warn   => "warn",
            Self::Fail   => "fail",
        };
        write!(f, "{}", s)
    }
}
