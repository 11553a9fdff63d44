// ============================================================
// Layer 2 — ListUseCase
// ============================================================
// Read-only preview of a batch: which files would be trained and
// where each capture would land, without spawning anything or
// touching the filesystem beyond one directory listing.
//
// Reference: Rust Book §12 (An I/O Project)

use anyhow::Result;
use serde::Serialize;

use crate::application::run_use_case::BatchConfig;
use crate::data::scanner::DirectoryScanner;
use crate::domain::traits::TrainingSource;

/// One planned invocation: the input the trainer would receive and
/// the capture file its stdout would be redirected into.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRun {
    pub input:  String,
    pub output: String,
}

// ─── ListUseCase ─────────────────────────────────────────────────────────────
pub struct ListUseCase {
    config: BatchConfig,
}

impl ListUseCase {
    /// Create a new ListUseCase with the given configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Scan the batch directory and report the planned invocations.
    /// Uses the same scanner as a real run, so the preview matches
    /// what `run` would do file for file.
    pub fn execute(&self) -> Result<Vec<PlannedRun>> {
        let cfg = &self.config;

        let scanner = DirectoryScanner::new(&cfg.dir, &cfg.suffix, cfg.sort);
        let planned = scanner
            .list_all()?
            .into_iter()
            .map(|f| {
                let output = f.output_name();
                PlannedRun { input: f.name, output }
            })
            .collect();

        Ok(planned)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> BatchConfig {
        BatchConfig {
            dir:  dir.path().to_str().unwrap().to_string(),
            sort: true,
            ..BatchConfig::default()
        }
    }

    #[test]
    fn test_pairs_each_input_with_its_capture() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("c.training"), "").unwrap();
        fs::write(dir.path().join("a.training"), "").unwrap();
        fs::write(dir.path().join("skip.txt"), "").unwrap();

        let planned = ListUseCase::new(config(&dir)).execute().unwrap();

        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].input, "a.training");
        assert_eq!(planned[0].output, "a.training.output");
        assert_eq!(planned[1].input, "c.training");
        assert_eq!(planned[1].output, "c.training.output");
    }

    #[test]
    fn test_preview_creates_no_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.training"), "").unwrap();

        ListUseCase::new(config(&dir)).execute().unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.training"]);
    }

    #[test]
    fn test_empty_directory_previews_empty() {
        let dir = TempDir::new().unwrap();
        let planned = ListUseCase::new(config(&dir)).execute().unwrap();
        assert!(planned.is_empty());
    }
}
