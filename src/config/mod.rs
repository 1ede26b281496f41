//! Configuration model for the simulated station.

pub mod station;

pub use station::StationConfig;
