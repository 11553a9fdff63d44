// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or process spawning
//   - NO clap or CLI types
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no filesystem, no child processes)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A training file selected by the directory scan
pub mod training_file;

// Per-invocation outcome and whole-batch summary
pub mod outcome;

// What to do when one invocation fails
pub mod policy;

// Core abstractions (traits) that other layers implement
pub mod traits;
