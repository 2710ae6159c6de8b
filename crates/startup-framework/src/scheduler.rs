//! # Task Graph & Startup Scheduler
//!
//! This module turns a set of [`Initializer`]s into an execution order and runs
//! them.
//!
//! ## Representation
//!
//! [`TaskGraph`] is an arena: tasks live in a `Vec` and dependencies are
//! resolved to indices into that `Vec` before anything runs. A `HashMap`
//! from [`TaskId`] to index is kept for lookups by identity.
//!
//! ## Ordering
//!
//! The order is computed with Kahn's algorithm. When several tasks are ready at
//! the same time, the one registered first runs first, so the order is stable
//! across runs and independent of hashing.
//!
//! ## Validation
//!
//! The whole graph is validated before the first task runs:
//!
//! - a dependency that was never registered fails with
//!   [`StartupError::MissingDependency`]
//! - a cycle fails with [`StartupError::DependencyCycle`], carrying the cycle
//!   itself (`A -> B -> A`) for the error message
//!
//! ## Execution
//!
//! [`StartupScheduler`] runs tasks sequentially on the calling thread. Each
//! task runs at most once per scheduler; [`StartupScheduler::initialize`]
//! runs a single task plus its transitive dependencies and skips anything
//! already initialized, so eager and lazy initialization can be mixed.

use crate::context::StartupContext;
use crate::error::StartupError;
use crate::task::{Initializer, TaskId};
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

/// A validated-on-demand set of initializers.
#[derive(Default)]
pub struct TaskGraph {
    tasks: Vec<Box<dyn Initializer>>,
    index: HashMap<TaskId, usize>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task to the graph.
    ///
    /// Dependencies are not checked here, so tasks can be added in any order.
    pub fn add(&mut self, task: impl Initializer) -> Result<&mut Self, StartupError> {
        let id = task.id();
        if self.index.contains_key(&id) {
            return Err(StartupError::DuplicateTask(id));
        }
        self.index.insert(id, self.tasks.len());
        self.tasks.push(Box::new(task));
        Ok(self)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the ids of all tasks in execution order.
    pub fn resolve_order(&self) -> Result<Vec<TaskId>, StartupError> {
        let edges = self.dependency_indices()?;
        let order = self.topological_order(&edges)?;
        Ok(order.into_iter().map(|i| self.tasks[i].id()).collect())
    }

    /// Resolves every declared dependency to an arena index.
    fn dependency_indices(&self) -> Result<Vec<Vec<usize>>, StartupError> {
        self.tasks
            .iter()
            .map(|task| -> Result<Vec<usize>, StartupError> {
                let mut deps: Vec<usize> = task
                    .dependencies()
                    .into_iter()
                    .map(|dependency| {
                        self.index.get(&dependency).copied().ok_or(
                            StartupError::MissingDependency {
                                task: task.id(),
                                dependency,
                            },
                        )
                    })
                    .collect::<Result<_, _>>()?;
                deps.sort_unstable();
                deps.dedup();
                Ok(deps)
            })
            .collect()
    }

    fn topological_order(&self, edges: &[Vec<usize>]) -> Result<Vec<usize>, StartupError> {
        let mut in_degree: Vec<usize> = edges.iter().map(Vec::len).collect();
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); edges.len()];
        for (task, deps) in edges.iter().enumerate() {
            for &dep in deps {
                dependents[dep].push(task);
            }
        }

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(i, _)| i)
            .collect();
        let mut order = Vec::with_capacity(edges.len());

        while let Some(task) = ready.pop_first() {
            order.push(task);
            for &dependent in &dependents[task] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if order.len() < edges.len() {
            let path = self.find_cycle(edges, &in_degree);
            warn!(cycle = ?path, "Dependency cycle detected");
            return Err(StartupError::DependencyCycle { path });
        }
        Ok(order)
    }

    /// Walks dependency edges among the tasks Kahn's algorithm could not order.
    ///
    /// Every such task still has at least one unordered dependency, so the walk
    /// must revisit a task; the revisited stretch is the cycle.
    fn find_cycle(&self, edges: &[Vec<usize>], in_degree: &[usize]) -> Vec<TaskId> {
        let stuck = |i: usize| in_degree[i] > 0;
        let Some(start) = (0..edges.len()).find(|&i| stuck(i)) else {
            return Vec::new();
        };

        let mut position: HashMap<usize, usize> = HashMap::new();
        let mut walk: Vec<usize> = Vec::new();
        let mut current = start;
        loop {
            if let Some(&first) = position.get(&current) {
                let mut path: Vec<TaskId> =
                    walk[first..].iter().map(|&i| self.tasks[i].id()).collect();
                path.push(self.tasks[current].id());
                return path;
            }
            position.insert(current, walk.len());
            walk.push(current);
            match edges[current].iter().copied().find(|&dep| stuck(dep)) {
                Some(next) => current = next,
                None => return walk.iter().map(|&i| self.tasks[i].id()).collect(),
            }
        }
    }
}

/// Runs the tasks of a [`TaskGraph`], each at most once.
///
/// # Example
///
/// ```rust
/// use startup_framework::{
///     AppContext, BoxError, BuildConfig, Initializer, StartupContext, StartupScheduler,
///     StringResources, TaskGraph, TaskId,
/// };
///
/// struct Greeting;
/// struct Announce;
///
/// impl Initializer for Greeting {
///     fn create(&self, ctx: &mut StartupContext) -> Result<(), BoxError> {
///         ctx.container().register_instance(String::from("hello"));
///         Ok(())
///     }
/// }
///
/// impl Initializer for Announce {
///     fn dependencies(&self) -> Vec<TaskId> {
///         vec![TaskId::of::<Greeting>()]
///     }
///     fn create(&self, _ctx: &mut StartupContext) -> Result<(), BoxError> {
///         Ok(())
///     }
/// }
///
/// let mut graph = TaskGraph::new();
/// // Registration order does not matter.
/// graph.add(Announce).unwrap();
/// graph.add(Greeting).unwrap();
///
/// let app = AppContext::new(BuildConfig { debug: false }, StringResources::default());
/// let mut ctx = StartupContext::new(app);
/// let mut scheduler = StartupScheduler::new(graph);
/// scheduler.run_all(&mut ctx).unwrap();
///
/// let (_, container) = ctx.finish();
/// assert_eq!(container.resolve::<String>().unwrap(), "hello");
/// ```
pub struct StartupScheduler {
    graph: TaskGraph,
    initialized: Vec<bool>,
}

impl StartupScheduler {
    pub fn new(graph: TaskGraph) -> Self {
        let initialized = vec![false; graph.len()];
        Self { graph, initialized }
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn is_initialized(&self, id: TaskId) -> bool {
        self.graph
            .index
            .get(&id)
            .is_some_and(|&i| self.initialized[i])
    }

    /// Runs every task that has not run yet, in dependency order.
    ///
    /// Nothing runs if the graph is invalid. If a task fails, the tasks after
    /// it are not run and the tasks before it are not rolled back.
    pub fn run_all(&mut self, ctx: &mut StartupContext) -> Result<(), StartupError> {
        let _span = info_span!("startup", tasks = self.graph.len()).entered();
        let edges = self.graph.dependency_indices()?;
        let order = self.graph.topological_order(&edges)?;
        debug!(order = ?self.ids(&order), "Resolved startup order");

        for task in order {
            self.run_task(task, ctx)?;
        }
        info!("Startup complete");
        Ok(())
    }

    /// Runs `target` and its transitive dependencies, skipping tasks that
    /// already ran.
    pub fn initialize(
        &mut self,
        target: TaskId,
        ctx: &mut StartupContext,
    ) -> Result<(), StartupError> {
        let _span = info_span!("initialize", task = %target).entered();
        let target_index = *self
            .graph
            .index
            .get(&target)
            .ok_or(StartupError::UnknownTask(target))?;
        let edges = self.graph.dependency_indices()?;
        let order = self.graph.topological_order(&edges)?;

        let mut needed = vec![false; edges.len()];
        let mut stack = vec![target_index];
        while let Some(task) = stack.pop() {
            if !needed[task] {
                needed[task] = true;
                stack.extend(edges[task].iter().copied());
            }
        }

        for task in order.into_iter().filter(|&task| needed[task]) {
            self.run_task(task, ctx)?;
        }
        Ok(())
    }

    fn run_task(&mut self, index: usize, ctx: &mut StartupContext) -> Result<(), StartupError> {
        if self.initialized[index] {
            debug!(task = %self.graph.tasks[index].id(), "Already initialized");
            return Ok(());
        }

        let task = &self.graph.tasks[index];
        let id = task.id();
        let started = Instant::now();
        debug!(task = %id, "Initializing");

        if let Err(source) = task.create(ctx) {
            warn!(task = %id, error = %source, "Initializer failed");
            return Err(StartupError::TaskFailed { task: id, source });
        }

        self.initialized[index] = true;
        let elapsed_us = started.elapsed().as_micros() as u64;
        info!(task = %id, elapsed_us, "Initialized");
        Ok(())
    }

    fn ids(&self, order: &[usize]) -> Vec<TaskId> {
        order.iter().map(|&i| self.graph.tasks[i].id()).collect()
    }
}
