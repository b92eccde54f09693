//! Iterative strategy: the additive recurrence with two running values.
//!
//! Starts from the pair (F(-1), F(0)) = (1, 0) and performs `n` steps of
//! `c = a + b; a = b; b = c`, after which `b` holds F(n).

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::calculator::{CoreCalculator, FibError};
use crate::constants::ITERATIVE_TRACE_INTERVAL;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

const NAME: &str = "Iterative";

/// Whether step `i` of an `n`-step loop is a trace checkpoint:
/// the first step, every hundredth step, and the last step.
#[must_use]
pub fn is_checkpoint(i: u64, n: u64) -> bool {
    i == 0 || i % ITERATIVE_TRACE_INTERVAL == 0 || i + 1 == n
}

/// Compute F(n) with O(n) additions and two auxiliary bignums.
pub fn iterative_fibonacci(n: u64, observer: &dyn ProgressObserver, calc_index: usize) -> BigUint {
    match n {
        0 => return BigUint::zero(),
        1 => return BigUint::one(),
        _ => {}
    }

    let mut a = BigUint::one();
    let mut b = BigUint::zero();

    for i in 0..n {
        if is_checkpoint(i, n) {
            observer.on_progress(&ProgressUpdate::at_step(calc_index, NAME, i, n));
        }
        let c = &a + &b;
        a = std::mem::replace(&mut b, c);
    }

    b
}

/// Iterative calculator.
pub struct IterativeCalculator;

impl IterativeCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for IterativeCalculator {
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<BigUint, FibError> {
        if opts.verbose {
            debug!(n, "Using iterative algorithm");
        }
        Ok(iterative_fibonacci(n, observer, calc_index))
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Iterative
    }
}
