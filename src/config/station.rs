//! Station configuration: sizes, durations, and the wait tick.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one simulation run.
///
/// Defaults mirror the classic scenario: 10 cars, 2 pumps, 30 ms per fill-up,
/// 30 seconds of run time, and a 5 ms wait tick. Car ids are assigned
/// `1..=cars` and pump ids `1..=pumps`; keeping those unique is this crate's
/// job, but callers constructing cars manually get no runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Number of car workers.
    pub cars: u32,
    /// Number of pumps in the pool.
    pub pumps: u32,
    /// Duration of one fill-up in milliseconds.
    pub service_time_ms: u64,
    /// Total run duration in milliseconds.
    pub run_time_ms: u64,
    /// Condvar re-check tick in milliseconds; bounds cancellation latency.
    pub poll_interval_ms: u64,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            cars: 10,
            pumps: 2,
            service_time_ms: 30,
            run_time_ms: 30_000,
            poll_interval_ms: 5,
        }
    }
}

impl StationConfig {
    /// Set the number of cars.
    #[must_use]
    pub const fn with_cars(mut self, cars: u32) -> Self {
        self.cars = cars;
        self
    }

    /// Set the number of pumps.
    #[must_use]
    pub const fn with_pumps(mut self, pumps: u32) -> Self {
        self.pumps = pumps;
        self
    }

    /// Set the per-fill-up service time in milliseconds.
    #[must_use]
    pub const fn with_service_time_ms(mut self, ms: u64) -> Self {
        self.service_time_ms = ms;
        self
    }

    /// Set the total run time in milliseconds.
    #[must_use]
    pub const fn with_run_time_ms(mut self, ms: u64) -> Self {
        self.run_time_ms = ms;
        self
    }

    /// Set the wait tick in milliseconds.
    #[must_use]
    pub const fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Per-fill-up service time.
    #[must_use]
    pub const fn service_time(&self) -> Duration {
        Duration::from_millis(self.service_time_ms)
    }

    /// Total run duration.
    #[must_use]
    pub const fn run_time(&self) -> Duration {
        Duration::from_millis(self.run_time_ms)
    }

    /// Condvar re-check tick.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first field that is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.cars == 0 {
            return Err("cars must be greater than 0".into());
        }
        if self.pumps == 0 {
            return Err("pumps must be greater than 0".into());
        }
        if self.service_time_ms == 0 {
            return Err("service_time_ms must be greater than 0".into());
        }
        if self.run_time_ms == 0 {
            return Err("run_time_ms must be greater than 0".into());
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns a message for parse failures or validation failures.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build a configuration from `FORECOURT_*` environment variables.
    ///
    /// Recognized variables: `FORECOURT_CARS`, `FORECOURT_PUMPS`,
    /// `FORECOURT_SERVICE_MS`, `FORECOURT_RUN_MS`, `FORECOURT_POLL_MS`.
    /// Unset variables keep their defaults; the result is validated.
    ///
    /// # Errors
    ///
    /// Returns a message for unparsable values or validation failures.
    pub fn from_env() -> Result<Self, String> {
        let mut cfg = Self::default();
        cfg.cars = read_env("FORECOURT_CARS", cfg.cars)?;
        cfg.pumps = read_env("FORECOURT_PUMPS", cfg.pumps)?;
        cfg.service_time_ms = read_env("FORECOURT_SERVICE_MS", cfg.service_time_ms)?;
        cfg.run_time_ms = read_env("FORECOURT_RUN_MS", cfg.run_time_ms)?;
        cfg.poll_interval_ms = read_env("FORECOURT_POLL_MS", cfg.poll_interval_ms)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn read_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{name} is not a valid value: `{raw}`")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(format!("{name} could not be read: {e}")),
    }
}
