//! The station controller: owns the shared state, runs the clock.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StationConfig;
use crate::core::cancel::CancelToken;
use crate::core::car::{Car, CarId, CarReport};
use crate::core::error::SimError;
use crate::core::pump::{Pump, PumpReport};
use crate::core::queue::FifoQueue;

/// The gas station: run controller for one bounded simulation.
///
/// The controller owns the configuration; each [`run`](Self::run) builds fresh
/// shared state (wait line, pump pool, cancellation token), spawns the car
/// workers, sleeps out the run duration, cancels, joins, and drains the pool.
#[derive(Debug)]
pub struct Station {
    config: StationConfig,
}

impl Station {
    /// Create a station from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: StationConfig) -> Result<Self, SimError> {
        config.validate().map_err(SimError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// The configuration this station runs with.
    #[must_use]
    pub const fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Run the simulation to completion and report final counts.
    ///
    /// Blocks the calling thread for the configured run duration plus
    /// shutdown latency (one wait tick plus at most one residual fill-up per
    /// worker).
    ///
    /// # Errors
    ///
    /// - [`SimError::Spawn`] if a worker thread cannot be created.
    /// - [`SimError::WorkerPanicked`] if a car worker panicked.
    /// - [`SimError::Invariant`] if the pool does not drain to exactly the
    ///   configured number of pumps — all workers have joined by then, so
    ///   anything else is a synchronization bug.
    pub fn run(&self) -> Result<StationReport, SimError> {
        let tick = self.config.poll_interval();
        let line: Arc<FifoQueue<CarId>> = Arc::new(FifoQueue::new());
        let pumps: Arc<FifoQueue<Pump>> = Arc::new(FifoQueue::new());
        let cancel = CancelToken::new();

        for id in 1..=self.config.pumps {
            pumps.push(Pump::new(id, self.config.service_time()));
        }

        info!(
            cars = self.config.cars,
            pumps = self.config.pumps,
            service_ms = self.config.service_time_ms,
            run_ms = self.config.run_time_ms,
            "station opening"
        );

        let mut workers: Vec<(CarId, JoinHandle<CarReport>)> =
            Vec::with_capacity(self.config.cars as usize);
        for id in 1..=self.config.cars {
            let line = Arc::clone(&line);
            let pumps = Arc::clone(&pumps);
            let cancel = cancel.clone();
            let handle = thread::Builder::new()
                .name(format!("car-{id}"))
                .spawn(move || Car::new(id).run(&line, &pumps, &cancel, tick))?;
            workers.push((id, handle));
        }

        thread::sleep(self.config.run_time());

        debug!("run time elapsed, closing station");
        cancel.cancel();

        let mut cars = Vec::with_capacity(workers.len());
        for (id, handle) in workers {
            match handle.join() {
                Ok(report) => {
                    debug!(car = id, fill_ups = report.fill_ups, "worker joined");
                    cars.push(report);
                }
                Err(_) => {
                    warn!(car = id, "worker panicked");
                    return Err(SimError::WorkerPanicked { car: id });
                }
            }
        }

        let mut pump_reports = Vec::with_capacity(self.config.pumps as usize);
        while let Some(pump) = pumps.try_pop() {
            pump_reports.push(pump.into_report());
        }
        if pump_reports.len() != self.config.pumps as usize {
            return Err(SimError::Invariant(format!(
                "pool drained {} of {} pumps",
                pump_reports.len(),
                self.config.pumps
            )));
        }

        info!(
            total_fill_ups = cars.iter().map(|c| c.fill_ups).sum::<u64>(),
            "station closed"
        );

        Ok(StationReport {
            pumps: pump_reports,
            cars,
        })
    }
}

/// Final counts for every pump and every car in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationReport {
    /// One report per pump, in drain order.
    pub pumps: Vec<PumpReport>,
    /// One report per car, in identity order.
    pub cars: Vec<CarReport>,
}

impl StationReport {
    /// Sum of fill-ups over all cars.
    #[must_use]
    pub fn total_car_fill_ups(&self) -> u64 {
        self.cars.iter().map(|c| c.fill_ups).sum()
    }

    /// Sum of fill-ups over all pumps.
    #[must_use]
    pub fn total_pump_fill_ups(&self) -> u64 {
        self.pumps.iter().map(|p| p.fill_ups).sum()
    }
}
