//! Cooperative cancellation for the simulation run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared, one-way cancellation token.
///
/// The token starts *armed* and makes a single transition to *cancelled*;
/// there is no way back. The station controller holds the only code path that
/// calls [`cancel`](Self::cancel); every car worker observes the token on each
/// wait iteration, so cancellation is cooperative — a car mid-fill finishes
/// its current fill-up before it notices.
///
/// Cloning is cheap and every clone observes the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, armed token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the token to cancelled. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
