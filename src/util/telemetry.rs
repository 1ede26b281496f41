//! Tracing setup for the simulator.

/// Install the default log subscriber if the caller has not set one.
///
/// The forecourt binary keeps contract output (banner, per-pump and per-car
/// report lines) on plain stdout and routes all diagnostics through
/// `tracing`, filtered by `RUST_LOG` (for example
/// `RUST_LOG=forecourt=debug` to watch cars move through the line).
/// Embedders that already installed a subscriber are left alone.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
