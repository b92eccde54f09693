//! # fib-core
//!
//! Arbitrary-precision Fibonacci engine for the `fib` calculator.
//! Implements iterative, memoized (bottom-up) and matrix-exponentiation
//! strategies over `BigUint`, plus decimal/hex/binary result formatting.

pub mod algorithm;
pub mod calculator;
pub mod constants;
pub mod format;
pub mod iterative;
pub mod matrix;
pub mod matrix_ops;
pub mod matrix_types;
pub mod memoized;
pub mod memory_budget;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod registry;

// Re-exports
pub use algorithm::Algorithm;
pub use calculator::{validate_index, Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, INTERACTIVE_MAX_INDEX};
pub use format::{format_result, OutputFormat};
pub use observer::{ProgressObserver, ProgressSubject};
pub use options::Options;
pub use progress::ProgressUpdate;
pub use registry::{CalculatorFactory, DefaultFactory};

use num_bigint::BigUint;

/// Compute F(n) with the given strategy.
///
/// This is a convenience function for simple use cases. For progress
/// reporting or memory limits, use the `Calculator` trait directly.
///
/// # Example
/// ```
/// use fib_core::Algorithm;
///
/// assert_eq!(fib_core::fibonacci(Algorithm::Matrix, 10).unwrap().to_string(), "55");
/// assert_eq!(fib_core::fibonacci(Algorithm::Iterative, 0).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(algorithm: Algorithm, n: u64) -> Result<BigUint, FibError> {
    let factory = DefaultFactory::new();
    let observer = observers::NoOpObserver::new();
    factory
        .for_algorithm(algorithm)
        .calculate(&observer, 0, n, &Options::default())
}
