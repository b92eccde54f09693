//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use fib_core::calculator::{Calculator, FibError};
use fib_core::observer::ProgressObserver;
use fib_core::observers::NoOpObserver;
use fib_core::options::Options;

use crate::interfaces::CalculationResult;

/// Execute calculations with all given calculators.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: u64,
    opts: &Options,
) -> Vec<CalculationResult> {
    execute_calculations_with_observer(calculators, n, opts, &NoOpObserver::new())
}

/// Execute calculations with all given calculators and a progress observer.
///
/// A single calculator runs on the calling thread. Several calculators run
/// in parallel on the rayon pool; each individual calculation is sequential.
/// Results keep the order of `calculators`.
pub fn execute_calculations_with_observer(
    calculators: &[Arc<dyn Calculator>],
    n: u64,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), 0, n, opts, observer)];
    }

    debug!(n, count = calculators.len(), "Running calculators in parallel");
    calculators
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(i, calc)| run_one(calc.as_ref(), i, n, opts, observer))
        .collect()
}

fn run_one(
    calc: &dyn Calculator,
    calc_index: usize,
    n: u64,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> CalculationResult {
    let start = Instant::now();
    let outcome = calc.calculate(observer, calc_index, n, opts);
    let duration = start.elapsed();

    match &outcome {
        Ok(value) => debug!(
            algorithm = calc.name(),
            bits = value.bits(),
            elapsed = ?duration,
            "Calculation finished"
        ),
        Err(e) => debug!(algorithm = calc.name(), error = %e, "Calculation failed"),
    }

    CalculationResult {
        algorithm: calc.name().to_string(),
        outcome,
        duration,
    }
}

/// Analyze comparison results for mismatches.
///
/// Failed calculations are skipped. Returns `Mismatch` if two successful
/// calculations disagree, or the first failure if none succeeded.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(CalculationResult::value);

    let Some(first) = values.next() else {
        return match results.iter().find_map(CalculationResult::error) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        };
    };

    if values.any(|v| v != first) {
        return Err(FibError::Mismatch);
    }
    Ok(())
}
