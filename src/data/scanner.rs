// ============================================================
// Layer 4 — Directory Scanner
// ============================================================
// Produces the set of training files for one batch run from a
// single directory listing.
//
// Selection rule: an entry is a training file when its NAME ends
// with the configured suffix. This is a plain string test, not an
// extension comparison, so multi-dot suffixes keep working and
// "report.training.bak" is correctly rejected. Entries are not
// checked for being regular files; a directory named
// "odd.training" is listed and the trainer is left to fail on it,
// which keeps the invocation count equal to the match count.
//
// Ordering: the listing order of the underlying filesystem is
// passed through untouched by default. It is NOT alphabetical and
// not stable across filesystems. The sort option switches to
// lexicographic filename order for reproducible runs.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::training_file::TrainingFile;
use crate::domain::traits::TrainingSource;

/// Lists the training files of one directory.
/// Implements the TrainingSource trait from Layer 3.
pub struct DirectoryScanner {
    /// Path to the batch directory
    dir: String,
    /// Filename suffix that marks an entry as a training file
    suffix: String,
    /// Sort matches lexicographically instead of listing order
    sort: bool,
}

impl DirectoryScanner {
    /// Create a new DirectoryScanner over a directory
    pub fn new(dir: impl Into<String>, suffix: impl Into<String>, sort: bool) -> Self {
        Self {
            dir:    dir.into(),
            suffix: suffix.into(),
            sort,
        }
    }
}

/// Implement the TrainingSource trait so the application layer
/// can call list_all() without knowing about directory listings
impl TrainingSource for DirectoryScanner {
    fn list_all(&self) -> Result<Vec<TrainingFile>> {
        let dir = Path::new(&self.dir);

        let mut files = Vec::new();

        // Walk every direct entry of the directory. An unreadable
        // directory is the one fatal condition of the whole run,
        // so the error propagates instead of yielding an empty set.
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir))?
        {
            let entry = entry?;
            let name  = entry.file_name();

            // The filename becomes the child's argument verbatim, so
            // a name that is not valid UTF-8 cannot be carried through
            // the String-based pipeline. Skip it loudly.
            let Some(name) = name.to_str() else {
                tracing::warn!(
                    "Skipping non-UTF-8 filename {:?} in '{}'",
                    entry.file_name(),
                    self.dir
                );
                continue;
            };

            if name.ends_with(&self.suffix) {
                files.push(TrainingFile::new(name));
            }
        }

        if self.sort {
            files.sort_by(|a, b| a.name.cmp(&b.name));
        }

        tracing::debug!(
            "Scan of '{}' matched {} entr{} with suffix '{}'",
            self.dir,
            files.len(),
            if files.len() == 1 { "y" } else { "ies" },
            self.suffix,
        );

        Ok(files)
    }
}
