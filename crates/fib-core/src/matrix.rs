//! Matrix exponentiation strategy.
//!
//! Q = [[1,1],[1,0]] satisfies Q^(n-1) = [[F(n), F(n-1)], [F(n-1), F(n-2)]]
//! for n >= 2, so F(n) is the top-left entry of Q^(n-1).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::calculator::{CoreCalculator, FibError};
use crate::matrix_ops::{matrix_power_with, power_call_count};
use crate::matrix_types::Matrix;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

const NAME: &str = "Matrix";

/// Whether the power call for `exponent` is a trace checkpoint: every
/// squaring step, which includes every exponent divisible by 50.
#[must_use]
pub fn is_checkpoint(exponent: u64) -> bool {
    exponent >= 2 && exponent.is_even()
}

/// Compute F(n) in O(log n) matrix products.
pub fn matrix_fibonacci(n: u64, observer: &dyn ProgressObserver, calc_index: usize) -> BigUint {
    match n {
        0 => return BigUint::zero(),
        1 => return BigUint::one(),
        _ => {}
    }

    let exponent = n - 1;
    let total_calls = power_call_count(exponent);
    let power = matrix_power_with(&Matrix::fibonacci_q(), exponent, &mut |calls, e| {
        if is_checkpoint(e) {
            observer.on_progress(&ProgressUpdate::at_step(
                calc_index,
                NAME,
                calls,
                total_calls,
            ));
        }
    });

    power.a11
}

/// Matrix exponentiation calculator.
pub struct MatrixExponentiation;

impl MatrixExponentiation {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixExponentiation {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MatrixExponentiation {
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<BigUint, FibError> {
        if opts.verbose {
            debug!(
                n,
                calls = power_call_count(n.saturating_sub(1)),
                "Using matrix exponentiation algorithm"
            );
        }
        Ok(matrix_fibonacci(n, observer, calc_index))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Matrix
    }
}
