//! Forecourt binary: run one simulated gas-station day and print the counts.
//!
//! Configuration comes from `FORECOURT_*` environment variables (optionally
//! via a `.env` file), falling back to the classic 10-cars/2-pumps scenario.
//! Diagnostics go to `tracing` (see `RUST_LOG`); the banner and the final
//! per-pump/per-car lines go to stdout.

use anyhow::Context;

use forecourt::config::StationConfig;
use forecourt::core::Station;
use forecourt::util::init_tracing;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = StationConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("reading FORECOURT_* configuration")?;

    println!(
        "Gas station simulator: {} cars, {} pumps, {}ms fill-up time, and {}ms total run time",
        config.cars, config.pumps, config.service_time_ms, config.run_time_ms
    );

    let station = Station::new(config)?;
    let report = station.run()?;

    for pump in &report.pumps {
        println!("{pump}");
    }
    for car in &report.cars {
        println!("{car}");
    }

    Ok(())
}
