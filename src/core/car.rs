//! The car: an independent worker that queues, fills up, and re-queues.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::core::cancel::CancelToken;
use crate::core::pump::Pump;
use crate::core::queue::FifoQueue;

/// Identity of a car, assigned `1..=M` by the station controller.
///
/// Uniqueness is the controller's responsibility; duplicate ids are not
/// defended against at runtime.
pub type CarId = u32;

/// One car in the simulation.
///
/// The worker thread owns its `Car` outright: the fill-up counter has exactly
/// one writer for the whole run, and the final count leaves the thread inside
/// the [`CarReport`] returned by [`run`](Self::run). Nothing about a car is
/// shared.
#[derive(Debug)]
pub struct Car {
    id: CarId,
    fill_ups: u64,
}

impl Car {
    /// Create a car with the given identity.
    #[must_use]
    pub const fn new(id: CarId) -> Self {
        Self { id, fill_ups: 0 }
    }

    /// This car's identity.
    #[must_use]
    pub const fn id(&self) -> CarId {
        self.id
    }

    /// Drive the car until the token is cancelled; returns the final report.
    ///
    /// The loop: join the line once, then wait for the head position, take a
    /// pump from the pool, leave the line, dispense, return the pump, rejoin
    /// the line.
    ///
    /// Two orderings here are load-bearing:
    ///
    /// - the car leaves the line only *after* taking a pump, so the next car
    ///   cannot advance to the head while this one is still waiting for a
    ///   pump — line order stays equal to service order;
    /// - on cancellation during either wait the car simply stops. Its id may
    ///   remain in the line (discarded with the line at teardown) but it never
    ///   stops while holding a pump, so the pool always recovers all pumps.
    pub fn run(
        mut self,
        line: &Arc<FifoQueue<CarId>>,
        pumps: &Arc<FifoQueue<Pump>>,
        cancel: &CancelToken,
        tick: Duration,
    ) -> CarReport {
        debug!(car = self.id, "entering line");
        line.push(self.id);

        loop {
            if !line.wait_for_front(&self.id, cancel, tick) {
                break;
            }
            // At the head. Only this car polls the pool, so pump acquisition
            // is serialized through the line head.
            let Some(mut pump) = pumps.pop_wait(cancel, tick) else {
                break;
            };
            match line.try_pop() {
                Some(id) if id == self.id => {}
                other => {
                    // The head changed while this car held the turn. That can
                    // only be a synchronization bug; give the pump back and
                    // abort this worker per the fatal-and-reported policy.
                    error!(car = self.id, head = ?other, "line head lost while holding turn");
                    pumps.push(pump);
                    break;
                }
            }

            pump.dispense();
            self.fill_ups += 1;
            debug!(car = self.id, fill_ups = self.fill_ups, pump = pump.id(), "filled up");

            pumps.push(pump);
            line.push(self.id);
        }

        debug!(car = self.id, fill_ups = self.fill_ups, "stopping");
        self.into_report()
    }

    /// Consume the car and produce its final report.
    #[must_use]
    pub fn into_report(self) -> CarReport {
        CarReport {
            id: self.id,
            fill_ups: self.fill_ups,
        }
    }
}

/// Final usage count for one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarReport {
    /// Car identity.
    pub id: CarId,
    /// Fill-ups completed over the run.
    pub fill_ups: u64,
}

impl fmt::Display for CarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {} filled up {} times", self.id, self.fill_ups)
    }
}
