// ============================================================
// Layer 5 — Execution Layer
// ============================================================
// This layer contains ALL child-process code. No other layer
// touches std::process — only this one.
//
// Why isolate process code here?
//   - The spawning rules (argument shape, working directory,
//     stream wiring) are the behavioural core of the tool and
//     live in exactly one place
//   - Other layers are testable without spawning anything
//   - The trainer contract is clearly separated from scanning
//     and orchestration
//
// What's in this layer:
//
//   process.rs — ProcessTrainer
//                Resolves the trainer executable, spawns it
//                once per training file with the bare filename
//                as its single argument, streams stdout into
//                the output file, and waits for the exit status
//
// Reference: Rust Book §12 (Building a CLI Program)
//            std::process documentation

/// Spawns the external trainer executable
pub mod process;
