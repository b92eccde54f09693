//! Concrete observer implementations.

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that sends updates through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<ProgressUpdate>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self { sender }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        // A full or disconnected channel drops the update.
        let _ = self.sender.try_send(update.clone());
    }
}

/// Observer that turns progress updates into `tracing` events.
///
/// This is what `--verbose` attaches: each strategy checkpoint becomes
/// a `debug!` line, completion an `info!` line.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(
                algorithm = %update.algorithm,
                calc = update.calc_index,
                "Calculation complete"
            );
        } else if update.total_steps == 0 {
            debug!(
                algorithm = %update.algorithm,
                step = update.current_step,
                "Progress update"
            );
        } else {
            debug!(
                algorithm = %update.algorithm,
                progress = format!("{:.1}%", update.progress * 100.0),
                step = update.current_step,
                total = update.total_steps,
                "Progress update"
            );
        }
    }
}

/// Null object pattern — does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
