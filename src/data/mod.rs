// ============================================================
// Layer 4 — Data Layer
// ============================================================
// This layer turns the state of the filesystem into domain
// values. For a batch runner that is one step:
//
//   batch directory
//       │
//       ▼
//   DirectoryScanner  → lists entries, keeps suffix matches,
//                       optionally sorts them
//       │
//       ▼
//   Vec<TrainingFile> → handed to the application layer
//
// The scanner never opens the matched files. Their contents
// belong to the external trainer; this layer only decides
// WHICH files take part in the run and in WHAT order.
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Lists the training files of the batch directory
pub mod scanner;
