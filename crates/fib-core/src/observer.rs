//! Observer pattern for progress tracking.
//!
//! Strategies emit sparse checkpoints (fixed step intervals), so observers
//! receive every update and decide for themselves what to do with it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Subject that manages a collection of observers.
///
/// A subject is itself an observer, so it can be handed to a calculator
/// to fan updates out to several sinks.
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn ProgressObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of a progress update.
    pub fn notify(&self, update: &ProgressUpdate) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_progress(update);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ProgressSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressSubject {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.notify(update);
    }
}
