//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal
//! submodules.

mod fixtures;
mod stub_feed;

#[allow(unused_imports)]
pub use fixtures::{job, raw_job};
#[allow(unused_imports)]
pub use stub_feed::StubJobFeed;

use std::time::Duration;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Installs a tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();
}

/// Polls `condition` until it holds or a generous timeout elapses.
#[allow(dead_code)]
pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within timeout");
}
