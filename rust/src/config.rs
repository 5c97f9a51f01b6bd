//! Configuration for PERT analysis runs.

/// Options controlling a PERT run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PertConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    pub verbosity: u8,
    /// Reject runs where some vertex has no duration. When false, missing
    /// durations are treated as zero. Negative durations are always rejected.
    pub strict_durations: bool,
}

impl Default for PertConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            strict_durations: true,
        }
    }
}

impl PertConfig {
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Treat missing durations as zero instead of failing.
    pub fn lenient(mut self) -> Self {
        self.strict_durations = false;
        self
    }
}
