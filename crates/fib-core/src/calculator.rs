//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by strategies.
//! `FibCalculator` is a decorator that adds the memory budget check,
//! the base cases (n <= 1) and completion reporting.

use std::sync::Arc;

use num_bigint::BigUint;
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::memory_budget::MemoryEstimate;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FibError {
    /// The requested index is negative.
    #[error("invalid index {0}: the Fibonacci index must be non-negative")]
    InvalidIndex(i64),

    /// The requested index exceeds a caller-imposed ceiling.
    #[error("index {n} exceeds the maximum of {max}")]
    IndexTooLarge { n: u64, max: u64 },

    /// Memory for the computation could not be obtained.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// A memo table was too small for the requested index.
    #[error("index {index} is out of range for a memo table of {len} slots")]
    OutOfRange { index: u64, len: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Check that a signed index is usable as a Fibonacci index.
///
/// # Example
/// ```
/// use fib_core::calculator::validate_index;
///
/// assert_eq!(validate_index(10).unwrap(), 10);
/// assert!(validate_index(-1).is_err());
/// ```
pub fn validate_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n).map_err(|_| FibError::InvalidIndex(n))
}

/// Reject indices above `max`.
pub fn check_index_ceiling(n: u64, max: u64) -> Result<u64, FibError> {
    if n > max {
        return Err(FibError::IndexTooLarge { n, max });
    }
    Ok(n)
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n) with the given options.
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;

    /// The strategy behind this calculator.
    fn algorithm(&self) -> Algorithm;
}

/// Internal trait for strategy implementations.
/// Wrapped by `FibCalculator` which adds the budget check and base cases.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation.
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<BigUint, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;

    /// The strategy this calculator implements.
    fn algorithm(&self) -> Algorithm;
}

/// Decorator that wraps a `CoreCalculator` with pre-flight checks and progress reporting.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    fn check_budget(&self, n: u64, opts: &Options) -> Result<(), FibError> {
        let estimate = MemoryEstimate::estimate(self.inner.algorithm(), n);
        if estimate.fits_in(opts.memory_limit) {
            return Ok(());
        }
        Err(FibError::ResourceExhausted(format!(
            "{} needs an estimated {} bytes for F({n}), limit is {} bytes",
            self.inner.name(),
            estimate.total_bytes,
            opts.memory_limit.unwrap_or_default(),
        )))
    }
}

impl Calculator for FibCalculator {
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<BigUint, FibError> {
        if n <= 1 {
            observer.on_progress(&ProgressUpdate::done(calc_index, self.inner.name()));
            return Ok(BigUint::from(n));
        }

        self.check_budget(n, opts)?;

        debug!(algorithm = self.inner.name(), n, "Starting calculation");
        let result = self.inner.calculate_core(observer, calc_index, n, opts)?;
        observer.on_progress(&ProgressUpdate::done(calc_index, self.inner.name()));
        Ok(result)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn algorithm(&self) -> Algorithm {
        self.inner.algorithm()
    }
}
