//! # Application Lifecycle
//!
//! This module owns process startup: it builds the task graph, runs it, and
//! hands the resulting container to the rest of the application.
//!
//! ## The Startup Sequence
//!
//! ```text
//! launch(context)
//!   1. TaskGraph   <- ContainerInitializer, LoggingInitializer
//!   2. Scheduler   -> LoggingInitializer, ContainerInitializer   (dependency order)
//!   3. finish()    -> Container (read-only)
//!   4. main_screen -> resolve MainViewModel -> resolve MainRepository -> resolve AppContext
//! ```
//!
//! ## Failure
//!
//! Startup either completes or fails with a [`StartupError`](startup_framework::StartupError).
//! There is no partial application: a failed launch returns no `StartupApp`, and
//! the binary exits with the error.
//!
//! ## Observability
//!
//! In debug builds the logging initializer installs the subscriber before any
//! other task runs, so the container initializer's messages are visible.
//! Set `RUST_LOG` to override the default level:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Task timings
//! RUST_LOG=debug cargo run     # Registrations and resolved order
//! ```

pub mod application;

pub use application::*;
