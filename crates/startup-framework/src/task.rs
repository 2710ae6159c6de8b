//! # Initializer Trait
//!
//! The `Initializer` trait defines the contract for one unit of startup work.
//! Each initializer names itself with a [`TaskId`], declares the ids of the
//! initializers that must run before it, and mutates the shared
//! [`StartupContext`] when it runs.
//!
//! Dependencies are declared as type references (`TaskId::of::<LoggingInitializer>()`)
//! rather than hand-written strings, so a renamed initializer fails to compile
//! instead of failing at startup.

use crate::context::StartupContext;
use crate::error::BoxError;
use std::fmt;

/// Identity of an initializer in the task graph.
///
/// Usually derived from the implementing type via [`TaskId::of`]. [`TaskId::new`]
/// exists for tasks that are not backed by a dedicated type (tests, closures).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(&'static str);

impl TaskId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The id of initializer type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(std::any::type_name::<T>())
    }

    /// Full name, including the module path for type-derived ids.
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// The name without its leading module path (e.g. "LoggingInitializer"
    /// instead of "startup_sample::initializer::LoggingInitializer").
    ///
    /// Generic arguments are kept as written: `app::Wrap<app::inner::Leaf>`
    /// becomes `Wrap<app::inner::Leaf>`.
    pub fn short_name(&self) -> &'static str {
        let head = self.0.find('<').map_or(self.0, |end| &self.0[..end]);
        let start = head.rfind("::").map_or(0, |sep| sep + 2);
        &self.0[start..]
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskId({})", self.0)
    }
}

/// A unit of startup work with declared prerequisites.
///
/// # Contract
///
/// - `id()` must be unique within a [`TaskGraph`](crate::TaskGraph).
/// - Every id returned by `dependencies()` must be registered in the same graph.
/// - `create()` is called at most once per scheduler, and only after every
///   dependency's `create()` has returned `Ok`.
///
/// # Example
///
/// ```rust
/// use startup_framework::{BoxError, Initializer, StartupContext, TaskId};
///
/// struct ConfigInitializer;
/// struct CacheInitializer;
///
/// impl Initializer for ConfigInitializer {
///     fn create(&self, _ctx: &mut StartupContext) -> Result<(), BoxError> {
///         Ok(())
///     }
/// }
///
/// impl Initializer for CacheInitializer {
///     fn dependencies(&self) -> Vec<TaskId> {
///         vec![TaskId::of::<ConfigInitializer>()]
///     }
///
///     fn create(&self, _ctx: &mut StartupContext) -> Result<(), BoxError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Initializer: Send + Sync + 'static {
    /// Identity of this task. Defaults to the implementing type's name.
    fn id(&self) -> TaskId {
        TaskId(std::any::type_name::<Self>())
    }

    /// Tasks that must complete before this one runs.
    fn dependencies(&self) -> Vec<TaskId> {
        Vec::new()
    }

    /// Performs the startup work.
    fn create(&self, ctx: &mut StartupContext) -> Result<(), BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl Initializer for Sample {
        fn create(&self, _ctx: &mut StartupContext) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_id_matches_type_id() {
        assert_eq!(Sample.id(), TaskId::of::<Sample>());
        assert_eq!(Sample.id().short_name(), "Sample");
        assert!(Sample.dependencies().is_empty());
    }

    #[test]
    fn test_named_ids_display_verbatim() {
        let id = TaskId::new("logging");
        assert_eq!(id.to_string(), "logging");
        assert_eq!(id.name(), "logging");
    }

    mod inner {
        pub struct Leaf;
    }

    struct Wrap<T>(std::marker::PhantomData<T>);

    #[test]
    fn test_generic_ids_keep_their_arguments() {
        let id = TaskId::of::<Wrap<inner::Leaf>>();
        assert!(id.short_name().starts_with("Wrap<"));
        assert!(id.short_name().ends_with("inner::Leaf>"));
        assert_eq!(id.to_string(), id.short_name());

        assert_eq!(TaskId::of::<Vec<u8>>().short_name(), "Vec<u8>");
    }
}
