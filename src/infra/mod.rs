// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles persistence concerns that don't belong in any
// specific business layer:
//
//   output.rs — Output file store
//               Places each "<input>.output" capture (named by
//               TrainingFile::output_name) in the batch
//               directory and creates it truncated for each
//               invocation to stream its stdout into.
//
// Why is this a separate layer?
//   The placement rule and the create/truncate semantics are
//   used by the execution layer but belong to the on-disk
//   contract of the tool, not to process handling. Keeping
//   them here:
//   - Keeps the execution layer focused on spawning
//   - Makes it easy to swap layouts (e.g. a separate output
//     directory) without touching process code
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Output file naming and creation
pub mod output;
