//! The pump: a reusable, exclusively-held resource unit.

use std::fmt;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identity of a pump, assigned `1..=N` by the station controller.
pub type PumpId = u32;

/// One gas pump.
///
/// A pump is a move-only value: it is not `Clone`, and it travels between the
/// pool queue and exactly one car at a time by ownership transfer. That makes
/// the mutual-exclusion property structural — no lock guards the fill-up
/// counter because no second holder can exist to race it.
#[derive(Debug)]
pub struct Pump {
    id: PumpId,
    service_time: Duration,
    fill_ups: u64,
}

impl Pump {
    /// Create a pump with the given identity and fixed per-fill service time.
    #[must_use]
    pub const fn new(id: PumpId, service_time: Duration) -> Self {
        Self {
            id,
            service_time,
            fill_ups: 0,
        }
    }

    /// This pump's identity.
    #[must_use]
    pub const fn id(&self) -> PumpId {
        self.id
    }

    /// Fill-ups completed so far.
    #[must_use]
    pub const fn fill_ups(&self) -> u64 {
        self.fill_ups
    }

    /// Dispense one fill-up: block for the service time, then count it.
    ///
    /// This is the only real-work delay in the simulation. The caller holds
    /// the pump exclusively for the whole call.
    pub fn dispense(&mut self) {
        thread::sleep(self.service_time);
        self.fill_ups += 1;
        tracing::trace!(pump = self.id, fill_ups = self.fill_ups, "dispensed");
    }

    /// Consume the pump and produce its final report.
    #[must_use]
    pub fn into_report(self) -> PumpReport {
        PumpReport {
            id: self.id,
            fill_ups: self.fill_ups,
        }
    }
}

/// Final usage count for one pump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpReport {
    /// Pump identity.
    pub id: PumpId,
    /// Fill-ups completed over the run.
    pub fill_ups: u64,
}

impl fmt::Display for PumpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pump {} filled up {} times", self.id, self.fill_ups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn dispense_blocks_and_counts() {
        let mut pump = Pump::new(1, Duration::from_millis(20));
        assert_eq!(pump.fill_ups(), 0);

        let start = Instant::now();
        pump.dispense();
        pump.dispense();

        assert!(start.elapsed() >= Duration::from_millis(40));
        assert_eq!(pump.fill_ups(), 2);
    }

    #[test]
    fn report_carries_final_count() {
        let mut pump = Pump::new(3, Duration::from_millis(1));
        pump.dispense();
        let report = pump.into_report();
        assert_eq!(report, PumpReport { id: 3, fill_ups: 1 });
        assert_eq!(report.to_string(), "Pump 3 filled up 1 times");
    }
}
