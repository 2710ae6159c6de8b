//! # Startup Framework
//!
//! This crate provides the building blocks for bootstrapping an application:
//! a dependency-ordered set of startup tasks, the injection container those
//! tasks populate, and the observable state that presentation code reads from
//! the container afterwards.
//!
//! ## Architecture Overview
//!
//! Startup is split into two phases with a hard boundary between them:
//!
//! 1. **Initialization** - a [`StartupScheduler`] runs every [`Initializer`] in a
//!    [`TaskGraph`], dependencies first. Initializers receive a
//!    [`StartupContext`] and register factories into its [`ContainerBuilder`].
//! 2. **Steady state** - [`StartupContext::finish`] freezes the builder into a
//!    [`Container`]. Presentation code resolves what it needs from it.
//!
//! Because registration happens on the builder and resolution only on the
//! frozen container, "resolve before startup finished" is not representable.
//!
//! ## Core Abstractions
//!
//! ### [`Initializer`] - A Unit of Startup Work
//!
//! Each initializer names itself (by default, after its type) and lists the
//! initializers that must run before it:
//!
//! ```rust
//! use startup_framework::{BoxError, Initializer, StartupContext, TaskId};
//!
//! struct LoggingInitializer;
//! struct DatabaseInitializer;
//!
//! impl Initializer for LoggingInitializer {
//!     fn create(&self, ctx: &mut StartupContext) -> Result<(), BoxError> {
//!         startup_framework::tracing::setup_tracing(ctx.app().config().debug);
//!         Ok(())
//!     }
//! }
//!
//! impl Initializer for DatabaseInitializer {
//!     fn dependencies(&self) -> Vec<TaskId> {
//!         vec![TaskId::of::<LoggingInitializer>()]
//!     }
//!
//!     fn create(&self, ctx: &mut StartupContext) -> Result<(), BoxError> {
//!         ctx.container().register(|_| Ok(42u32));
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ### [`StartupScheduler`] - Ordering & Execution
//!
//! Validates the graph (missing dependencies, cycles) before running anything,
//! then runs tasks sequentially in topological order. See the [`scheduler`]
//! module for the algorithm.
//!
//! ### [`Container`] - Dependency Injection
//!
//! A map from type to factory. Every resolution builds a new instance, and
//! factories can resolve their own dependencies from the same container.
//!
//! ### [`Observable`] - Presentation State
//!
//! A single current value broadcast to subscribers on change.
//!
//! ## Error Handling
//!
//! Each concern has its own error enum: [`StartupError`], [`ContainerError`]
//! and [`ResourceError`]. Startup errors are fatal by design of the caller:
//! the scheduler reports them and never retries.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockTask`](mock::MockTask) and
//! [`ExecutionLog`](mock::ExecutionLog) for asserting run order and injecting
//! failures without real side effects.

pub mod container;
pub mod context;
pub mod error;
pub mod mock;
pub mod observable;
pub mod scheduler;
pub mod task;
pub mod tracing;

// Re-export core types for convenience
pub use container::{Container, ContainerBuilder, Module};
pub use context::{AppContext, BuildConfig, StartupContext, StringResources};
pub use error::{BoxError, ContainerError, ResourceError, StartupError};
pub use observable::{Observable, Subscription};
pub use scheduler::{StartupScheduler, TaskGraph};
pub use task::{Initializer, TaskId};
