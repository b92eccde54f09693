//! Constants for tracing cadence, input ceilings and exit codes.

/// The iterative strategy reports every this many additions.
pub const ITERATIVE_TRACE_INTERVAL: u64 = 100;

/// The memoized strategy reports every this many table entries.
pub const MEMO_TRACE_INTERVAL: u64 = 100;

/// The memoized strategy reports every entry up to this index.
pub const MEMO_TRACE_WARMUP: u64 = 10;

/// Largest index accepted by the interactive prompt.
pub const INTERACTIVE_MAX_INDEX: u64 = 1_000_000;

/// log2 of the golden ratio: F(n) has about `n * LOG2_PHI` bits.
pub const LOG2_PHI: f64 = 0.694_241_913_630_617_3;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, unexpected failure).
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Memory budget exceeded or allocation refused.
    pub const ERROR_RESOURCE: i32 = 5;
}
