//! Leaveform fills a fixed annual-leave request template with dates, a
//! reason, and a running leave balance, keeping the balance in a small
//! per-user config file between runs.

pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod record;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("leaveform=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
