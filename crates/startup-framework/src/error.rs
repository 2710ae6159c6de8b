//! # Framework Errors
//!
//! This module defines the error types used throughout the startup framework.
//! Each concern gets its own enum so callers can match on exactly the failures
//! that the operation they called can produce:
//!
//! - [`StartupError`] - task graph validation and task execution
//! - [`ContainerError`] - dependency resolution
//! - [`ResourceError`] - string table lookups and parsing

use crate::task::TaskId;

/// Boxed error returned by task bodies and factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while validating or running the startup task graph.
///
/// All graph errors (`DuplicateTask`, `MissingDependency`, `DependencyCycle`,
/// `UnknownTask`) are detected before any task runs. They are configuration
/// errors and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Task registered twice: {0}")]
    DuplicateTask(TaskId),
    #[error("Task {task} depends on unregistered task {dependency}")]
    MissingDependency { task: TaskId, dependency: TaskId },
    #[error("Dependency cycle: {}", format_path(.path))]
    DependencyCycle { path: Vec<TaskId> },
    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),
    #[error("Task {task} failed: {source}")]
    TaskFailed {
        task: TaskId,
        #[source]
        source: BoxError,
    },
}

fn format_path(path: &[TaskId]) -> String {
    path.iter()
        .map(|id| id.short_name())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Errors raised by [`Container::resolve`](crate::Container::resolve).
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("No factory registered for {type_name}")]
    NotFound { type_name: &'static str },
    #[error("Factory for {type_name} failed: {source}")]
    Factory {
        type_name: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ContainerError {
    /// Wraps a factory failure for `T`.
    pub fn factory<T: ?Sized>(source: impl Into<BoxError>) -> Self {
        ContainerError::Factory {
            type_name: std::any::type_name::<T>(),
            source: source.into(),
        }
    }
}

/// Errors raised by the string resource table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    #[error("String resource not found: {0}")]
    Missing(String),
    #[error("Invalid string table: {0}")]
    Parse(String),
}
