//! Best-effort progress reporting for long-running sweeps.

use std::sync::atomic::{AtomicU64, Ordering};

/// A loosely-synchronized iteration counter.
///
/// The iteration kernels store the current outer-iteration index here once per
/// sweep, so a concurrent observer (a reporting thread, a UI) can poll how far
/// the computation has progressed. Updates use [`Ordering::Relaxed`]: the
/// counter is monotone within one invocation, but observers get no further
/// synchronization guarantees.
#[derive(Debug, Default)]
pub struct ProgressCounter(AtomicU64);

impl ProgressCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> ProgressCounter {
        ProgressCounter(AtomicU64::new(0))
    }

    /// Record the current outer-iteration index.
    pub fn set(&self, iteration: u64) {
        self.0.store(iteration, Ordering::Relaxed);
    }

    /// Read the most recently recorded iteration index.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
