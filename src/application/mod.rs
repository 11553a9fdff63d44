// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (running a batch or previewing one).
//
// Rules for this layer:
//   - No process spawning here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct directory/file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The batch-run workflow
pub mod run_use_case;

// The read-only preview workflow
pub mod list_use_case;
