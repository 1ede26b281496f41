//! # Forecourt
//!
//! A condvar-coordinated simulation of a gas-station forecourt.
//!
//! A fixed population of car workers, each on its own OS thread, competes for
//! a small pool of pumps through a single FIFO waiting line. The run lasts a
//! bounded wall-clock duration; at teardown every pump and every car reports
//! how many fill-ups it completed.
//!
//! ## Coordination model
//!
//! The entire simulation is built on two shared [`core::FifoQueue`]s:
//!
//! - the **wait line**, a queue of car ids — line order determines service
//!   order, strictly FIFO, no priorities;
//! - the **pump pool**, a queue of [`core::Pump`] values — pumps are move-only
//!   and travel through the queue by ownership transfer, so two cars can never
//!   hold the same pump at once.
//!
//! A car leaves the line only *after* it has taken a pump from the pool. This
//! serializes pump acquisition through the head of the line, which is exactly
//! what keeps the line order equal to the service order.
//!
//! Waits are condition-variable based, not busy-polled: every `push`/`pop`
//! notifies the queue's waiters, and a shared [`core::CancelToken`] bounds how
//! long any car keeps waiting once the controller calls time.
//!
//! ## Example
//!
//! ```rust,no_run
//! use forecourt::config::StationConfig;
//! use forecourt::core::Station;
//!
//! let config = StationConfig::default()
//!     .with_cars(4)
//!     .with_pumps(2)
//!     .with_run_time_ms(500);
//!
//! let station = Station::new(config)?;
//! let report = station.run()?;
//! for pump in &report.pumps {
//!     println!("{pump}");
//! }
//! for car in &report.cars {
//!     println!("{car}");
//! }
//! # Ok::<(), forecourt::core::SimError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Coordination core: queue, cancellation, pumps, cars, and the controller.
pub mod core;
/// Configuration model for the simulated station.
pub mod config;
/// Shared utilities.
pub mod util;
