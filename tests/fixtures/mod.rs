//! Test fixtures for trip-feasibility.
//!
//! Provides the sample Japan trip:
//! - Four travelers with budget, date, visa and must-visit constraints
//! - A city catalog with per-person costs and coordinates
//! - Candidate routes built from the catalog
//!
//! Set `RUST_LOG=trip_feasibility=trace` to see evaluator events in test output.

pub mod japan_trip;

pub use japan_trip::*;

use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
