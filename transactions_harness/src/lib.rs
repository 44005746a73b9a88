//! Test-support layer for the transactions API suites: a mock server that
//! enforces the documented request contract, customer test-data loading,
//! and tracing setup.

use std::sync::Once;

pub mod mock;
pub mod testdata;

static INIT: Once = Once::new();

/// Initializes tracing for test binaries. Honors `RUST_LOG`; safe to call
/// from every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .init();
    });
}
