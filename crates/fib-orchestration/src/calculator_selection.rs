//! Calculator selection logic.

use std::sync::Arc;

use fib_core::calculator::{Calculator, FibError};
use fib_core::registry::CalculatorFactory;

/// Selector that runs every registered calculator.
pub const ALL: &str = "all";

/// Get calculators to run based on algorithm selection.
///
/// `"all"` selects every registered calculator in registry order; any other
/// name selects a single calculator.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    if algo.trim().eq_ignore_ascii_case(ALL) {
        return factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect();
    }

    Ok(vec![factory.get(algo)?])
}
