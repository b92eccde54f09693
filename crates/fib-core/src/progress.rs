//! Progress tracking types.

/// Progress update sent from strategies to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Calculator index (for multi-calculator runs).
    pub calc_index: usize,
    /// Name of the algorithm producing this update.
    pub algorithm: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Current step number (loop index or matrix-power call count).
    pub current_step: u64,
    /// Total number of steps, or 0 when unknown in advance.
    pub total_steps: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(
        calc_index: usize,
        algorithm: &'static str,
        progress: f64,
        current: u64,
        total: u64,
    ) -> Self {
        Self {
            calc_index,
            algorithm,
            progress,
            current_step: current,
            total_steps: total,
            done: false,
        }
    }

    /// Create an update for step `current` of `total`, deriving the fraction.
    #[must_use]
    pub fn at_step(calc_index: usize, algorithm: &'static str, current: u64, total: u64) -> Self {
        Self::new(
            calc_index,
            algorithm,
            step_fraction(current, total),
            current,
            total,
        )
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(calc_index: usize, algorithm: &'static str) -> Self {
        Self {
            calc_index,
            algorithm,
            progress: 1.0,
            current_step: 0,
            total_steps: 0,
            done: true,
        }
    }
}

/// Fraction of work done at `current` out of `total`, clamped to [0.0, 1.0].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn step_fraction(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (current as f64 / total as f64).clamp(0.0, 1.0)
}
