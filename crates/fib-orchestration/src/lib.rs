//! # fib-orchestration
//!
//! Calculator selection, timed execution, and cross-algorithm comparison.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{drain_progress, CalculationResult, ProgressReporter, ResultPresenter};
pub use orchestrator::{
    analyze_comparison_results, execute_calculations, execute_calculations_with_observer,
};
