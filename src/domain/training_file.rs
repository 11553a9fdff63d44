// ============================================================
// Layer 3 — TrainingFile Domain Type
// ============================================================
// Represents one input file selected for a batch run.
// This is a plain data struct with almost no behaviour,
// just the filename and the naming rule for its output file.
//
// A TrainingFile is identified purely by its filename SUFFIX
// (".training" by default). The runner never opens it, never
// parses it, never deletes it. Only the external trainer
// executable ever reads its contents.
//
// Using #[derive(Debug, Clone)] gives us:
//   - Debug: lets us print the struct with {:?}
//   - Clone: lets us make copies of the struct
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

/// The suffix appended to an input filename to form its output filename.
pub const OUTPUT_SUFFIX: &str = ".output";

/// One training file found in the batch directory.
///
/// Only the bare filename is stored, never a path: the trainer is
/// invoked with this exact string as its single argument, and the
/// batch directory is supplied separately as the child's working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingFile {
    /// The bare filename, e.g. "iris.training" (no directory prefix)
    pub name: String,
}

impl TrainingFile {
    /// Create a new TrainingFile from a bare filename.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The filename of this file's captured-stdout sidecar.
    ///
    /// The rule is plain concatenation, so "iris.training" becomes
    /// "iris.training.output". The input suffix is NOT stripped.
    pub fn output_name(&self) -> String {
        format!("{}{}", self.name, OUTPUT_SUFFIX)
    }
}
