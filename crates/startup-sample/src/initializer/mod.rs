//! # Startup Initializers
//!
//! The application's fixed set of startup tasks:
//!
//! ```text
//! LoggingInitializer  (no dependencies)
//!         ^
//!         |
//! ContainerInitializer
//! ```
//!
//! Both are registered in [`StartupApp::startup_graph`](crate::lifecycle::StartupApp::startup_graph);
//! the scheduler, not registration order, decides that logging comes first.

pub mod container;
pub mod logging;

pub use container::*;
pub use logging::*;
