//! Orchestration interfaces.

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use num_bigint::BigUint;

use fib_core::calculator::FibError;
use fib_core::progress::ProgressUpdate;

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress update.
    fn report(&self, update: &ProgressUpdate);

    /// Report completion of every calculation.
    fn complete(&self);
}

/// Forward updates from `updates` to `reporter` until every sender is dropped.
///
/// Meant to run on its own thread, fed by a `ChannelObserver`, so drawing
/// never blocks a calculation.
pub fn drain_progress(updates: &Receiver<ProgressUpdate>, reporter: &dyn ProgressReporter) {
    for update in updates {
        reporter.report(&update);
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present F(n) and the time it took.
    fn present_result(&self, n: u64, value: &BigUint, duration: Duration) -> io::Result<()>;

    /// Present the per-algorithm summary of a comparison run.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present a failed calculation.
    fn present_error(&self, algorithm: &str, error: &FibError);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<BigUint, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&BigUint> {
        self.outcome.as_ref().ok()
    }

    /// The error, if the calculation failed.
    #[must_use]
    pub fn error(&self) -> Option<&FibError> {
        self.outcome.as_ref().err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_forwards_until_senders_drop() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        use fib_core::observer::{ProgressObserver, ProgressSubject};
        use fib_core::observers::ChannelObserver;

        struct Counting(AtomicUsize);
        impl ProgressReporter for Counting {
            fn report(&self, _update: &ProgressUpdate) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
            fn complete(&self) {}
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        let subject = ProgressSubject::new();
        subject.register(Arc::new(ChannelObserver::new(tx)));

        let reporter = Arc::new(Counting(AtomicUsize::new(0)));
        let sink = Arc::clone(&reporter);
        let handle = std::thread::spawn(move || drain_progress(&rx, sink.as_ref()));

        subject.on_progress(&ProgressUpdate::at_step(0, "Matrix", 1, 2));
        subject.on_progress(&ProgressUpdate::done(0, "Matrix"));
        // Dropping the last sender ends the drain loop.
        subject.clear();
        handle.join().unwrap();

        assert_eq!(reporter.0.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn calculation_result_accessors() {
        let ok = CalculationResult {
            algorithm: "Matrix".into(),
            outcome: Ok(BigUint::from(55u32)),
            duration: Duration::from_millis(100),
        };
        assert_eq!(ok.value(), Some(&BigUint::from(55u32)));
        assert!(ok.error().is_none());

        let failed = CalculationResult {
            algorithm: "Recursive".into(),
            outcome: Err(FibError::ResourceExhausted("memo table".into())),
            duration: Duration::ZERO,
        };
        assert!(failed.value().is_none());
        assert!(matches!(failed.error(), Some(FibError::ResourceExhausted(_))));
    }
}
