//! Calculation options.

/// Options for Fibonacci calculation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Memory limit in bytes (`None` = unlimited).
    pub memory_limit: Option<usize>,
    /// Whether the caller wants diagnostic trace output.
    pub verbose: bool,
}

impl Options {
    /// Normalize options: a zero memory limit means unlimited.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.memory_limit == Some(0) {
            self.memory_limit = None;
        }
        self
    }
}
