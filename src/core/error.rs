//! Error types for simulation runs.

use thiserror::Error;

use crate::core::car::CarId;

/// Errors produced by the station controller.
///
/// The taxonomy is deliberately small: there is no I/O and no external
/// resource acquisition, so the only runtime faults are invariant violations,
/// which indicate a synchronization bug rather than a transient condition.
/// Nothing here is retried.
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration failed validation before the run started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// An OS thread for a car worker could not be spawned.
    #[error("failed to spawn car worker: {0}")]
    Spawn(#[from] std::io::Error),
    /// A car worker panicked; its report is lost.
    #[error("car {car} worker panicked")]
    WorkerPanicked {
        /// Identity of the panicked worker.
        car: CarId,
    },
    /// Shared state was observed in a state the protocol forbids.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
