//! # Mock Initializers & Testing Guide
//!
//! Testing a startup sequence means asserting *what ran, in which order*, and
//! *what happened when something failed*. [`ExecutionLog`] records the ids of
//! the tasks that ran; [`MockTask`] is an initializer that appends itself to a
//! log, optionally failing instead.
//!
//! ## When to use Mocks vs Real Initializers
//!
//! | Feature | MockTask | Real Initializer |
//! |---------|----------|------------------|
//! | **Side effects** | None (records its id) | Real (logging, container) |
//! | **Identity** | Any name (`"logging"`) | Type-derived |
//! | **Use Case** | Ordering and failure tests | End-to-end startup tests |
//! | **Error Injection** | Easy (`failing`) | Hard (requires bad config) |
//!
//! ## Ordering Test
//!
//! ```rust
//! use startup_framework::mock::ExecutionLog;
//! use startup_framework::{AppContext, BuildConfig, StartupContext, StartupScheduler, StringResources, TaskGraph};
//!
//! let log = ExecutionLog::new();
//! let mut graph = TaskGraph::new();
//! graph.add(log.task("container").depends_on(["logging"])).unwrap();
//! graph.add(log.task("logging")).unwrap();
//!
//! let app = AppContext::new(BuildConfig::default(), StringResources::default());
//! let mut ctx = StartupContext::new(app);
//! StartupScheduler::new(graph).run_all(&mut ctx).unwrap();
//!
//! assert_eq!(log.names(), ["logging", "container"]);
//! ```
//!
//! ## Failure Test
//!
//! ```rust
//! use startup_framework::mock::ExecutionLog;
//! use startup_framework::{AppContext, BuildConfig, StartupContext, StartupError, StartupScheduler, StringResources, TaskGraph};
//!
//! let log = ExecutionLog::new();
//! let mut graph = TaskGraph::new();
//! graph.add(log.task("first")).unwrap();
//! graph.add(log.task("broken").depends_on(["first"]).failing("disk full")).unwrap();
//! graph.add(log.task("last").depends_on(["broken"])).unwrap();
//!
//! let app = AppContext::new(BuildConfig::default(), StringResources::default());
//! let mut ctx = StartupContext::new(app);
//! let err = StartupScheduler::new(graph).run_all(&mut ctx).unwrap_err();
//!
//! assert!(matches!(err, StartupError::TaskFailed { task, .. } if task.name() == "broken"));
//! assert_eq!(log.names(), ["first"]);
//! ```

use crate::context::StartupContext;
use crate::error::BoxError;
use crate::task::{Initializer, TaskId};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared, append-only record of the tasks that ran.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog {
    entries: Arc<Mutex<Vec<TaskId>>>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`MockTask`] that records into this log.
    pub fn task(&self, name: &'static str) -> MockTask {
        MockTask {
            id: TaskId::new(name),
            dependencies: Vec::new(),
            failure: None,
            log: self.clone(),
        }
    }

    pub fn record(&self, id: TaskId) {
        self.lock().push(id);
    }

    pub fn entries(&self) -> Vec<TaskId> {
        self.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.lock().iter().map(TaskId::name).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.lock().iter().position(|id| id.name() == name)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TaskId>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Initializer that records its id instead of doing real work.
#[derive(Debug)]
pub struct MockTask {
    id: TaskId,
    dependencies: Vec<TaskId>,
    failure: Option<&'static str>,
    log: ExecutionLog,
}

impl MockTask {
    pub fn depends_on(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
        self.dependencies.extend(names.into_iter().map(TaskId::new));
        self
    }

    pub fn depends_on_id(mut self, id: TaskId) -> Self {
        self.dependencies.push(id);
        self
    }

    /// Makes `create` fail with `message` without recording.
    pub fn failing(mut self, message: &'static str) -> Self {
        self.failure = Some(message);
        self
    }
}

impl Initializer for MockTask {
    fn id(&self) -> TaskId {
        self.id
    }

    fn dependencies(&self) -> Vec<TaskId> {
        self.dependencies.clone()
    }

    fn create(&self, _ctx: &mut StartupContext) -> Result<(), BoxError> {
        if let Some(message) = self.failure {
            return Err(message.into());
        }
        self.log.record(self.id);
        Ok(())
    }
}
