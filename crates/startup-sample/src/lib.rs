//! # Startup Sample App
//!
//! A minimal application built on `startup-framework`: two initializers, one
//! repository, one view model and one screen that shows a single string.
//!
//! ## Core Components
//!
//! - **[initializer]**: [`LoggingInitializer`](initializer::LoggingInitializer) and
//!   [`ContainerInitializer`](initializer::ContainerInitializer).
//! - **[di]**: Container modules for the repository and view model layers.
//! - **[repository]**: [`MainRepository`](repository::MainRepository), a pass-through to the string table.
//! - **[presentation]**: [`MainViewModel`](presentation::MainViewModel) and [`MainScreen`](presentation::MainScreen).
//! - **[lifecycle]**: [`StartupApp`](lifecycle::StartupApp), which runs startup and owns the container.
//! - **[resources]**: The embedded string table.

pub mod di;
pub mod error;
pub mod initializer;
pub mod lifecycle;
pub mod presentation;
pub mod repository;
pub mod resources;
