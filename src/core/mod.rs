//! Coordination core for the forecourt simulation.

pub mod cancel;
pub mod car;
pub mod error;
pub mod pump;
pub mod queue;
pub mod station;

pub use cancel::CancelToken;
pub use car::{Car, CarId, CarReport};
pub use error::{AppResult, SimError};
pub use pump::{Pump, PumpId, PumpReport};
pub use queue::FifoQueue;
pub use station::{Station, StationReport};
