//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. It is
//! normally called by the application's logging initializer, and only when the
//! build is a debug build.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format without module targets and writes to
//! stderr, leaving stdout to the application. The level is
//! read from `RUST_LOG` when set; otherwise it defaults to `debug` in verbose
//! mode and `warn` otherwise.
//!
//! ```bash
//! # Startup order and per-task timings
//! RUST_LOG=info cargo run
//!
//! # Container registrations and the resolved order
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=startup_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Scheduler**: resolved order, each task's start and elapsed time, failures
//! - **Container**: registrations, replaced factories, module loads
//! - **Application**: the messages initializers log once they finish

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// repeated calls (for example from several tests) harmless.
pub fn setup_tracing(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
