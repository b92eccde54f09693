//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::algorithm::Algorithm;
use crate::calculator::{Calculator, FibCalculator, FibError};
use crate::iterative::IterativeCalculator;
use crate::matrix::MatrixExponentiation;
use crate::memoized::MemoizedCalculator;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<Algorithm, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create the calculator for `algorithm`.
    pub fn for_algorithm(&self, algorithm: Algorithm) -> Arc<dyn Calculator> {
        if let Some(calc) = self.cache.read().get(&algorithm) {
            return Arc::clone(calc);
        }

        let calc = Self::create_calculator(algorithm);
        self.cache.write().insert(algorithm, Arc::clone(&calc));
        calc
    }

    fn create_calculator(algorithm: Algorithm) -> Arc<dyn Calculator> {
        match algorithm {
            Algorithm::Iterative => Arc::new(FibCalculator::new(Arc::new(IterativeCalculator::new()))),
            Algorithm::Recursive => Arc::new(FibCalculator::new(Arc::new(MemoizedCalculator::new()))),
            Algorithm::Matrix => Arc::new(FibCalculator::new(Arc::new(MatrixExponentiation::new()))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let algorithm: Algorithm = name.parse()?;
        Ok(self.for_algorithm(algorithm))
    }

    fn available(&self) -> Vec<&str> {
        Algorithm::ALL.iter().map(|a| a.short_name()).collect()
    }
}
