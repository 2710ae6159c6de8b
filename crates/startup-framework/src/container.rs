//! # Injection Container
//!
//! A registry of factories keyed by the type they produce. The container is
//! split into two phases so that resolution can never observe a half-populated
//! registry:
//!
//! 1. [`ContainerBuilder`] - registration only. Owned by the
//!    [`StartupContext`](crate::StartupContext) while initializers run.
//! 2. [`Container`] - resolution only. Produced by [`ContainerBuilder::build`]
//!    and immutable afterwards, so it can be shared freely behind an `Arc`.
//!
//! Every registration has factory scope: each [`Container::resolve`] call runs
//! the factory again and returns a fresh instance. Factories receive the
//! container itself so they can resolve their own dependencies.
//!
//! ```rust
//! use startup_framework::ContainerBuilder;
//!
//! #[derive(Clone)]
//! struct Greeting(&'static str);
//! struct Greeter { greeting: Greeting }
//!
//! let mut builder = ContainerBuilder::new();
//! builder.register_instance(Greeting("hello"));
//! builder.register(|c| Ok(Greeter { greeting: c.resolve::<Greeting>()? }));
//!
//! let container = builder.build();
//! let greeter = container.resolve::<Greeter>().unwrap();
//! assert_eq!(greeter.greeting.0, "hello");
//! ```

use crate::error::ContainerError;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

type Instance = Box<dyn Any + Send>;
type Factory = Box<dyn Fn(&Container) -> Result<Instance, ContainerError> + Send + Sync>;

struct Registration {
    type_name: &'static str,
    factory: Factory,
}

/// Collects factory registrations during startup.
#[derive(Default)]
pub struct ContainerBuilder {
    registrations: HashMap<TypeId, Registration>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for `T`.
    ///
    /// Registering the same type twice replaces the earlier factory and logs a warning.
    pub fn register<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Send + 'static,
        F: Fn(&Container) -> Result<T, ContainerError> + Send + Sync + 'static,
    {
        let type_name = type_name::<T>();
        let registration = Registration {
            type_name,
            factory: Box::new(move |container: &Container| {
                factory(container).map(|instance| Box::new(instance) as Instance)
            }),
        };

        if self
            .registrations
            .insert(TypeId::of::<T>(), registration)
            .is_some()
        {
            warn!(type_name, "Factory replaced");
        } else {
            debug!(type_name, "Factory registered");
        }
        self
    }

    /// Registers a factory that hands out clones of `value`.
    pub fn register_instance<T>(&mut self, value: T) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.register(move |_| Ok(value.clone()))
    }

    /// Applies every registration in `module`.
    pub fn load(&mut self, module: Module) -> &mut Self {
        debug!(module = module.name, "Loading module");
        (module.register)(self);
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Freezes the registrations.
    pub fn build(self) -> Container {
        Container {
            registrations: self.registrations,
        }
    }
}

/// Read-only registry produced by [`ContainerBuilder::build`].
pub struct Container {
    registrations: HashMap<TypeId, Registration>,
}

impl Container {
    /// Builds a new `T` from its registered factory.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::NotFound`] if nothing is registered for `T`.
    /// - Whatever the factory returns, including failures resolving its own dependencies.
    pub fn resolve<T: 'static>(&self) -> Result<T, ContainerError> {
        let registration =
            self.registrations
                .get(&TypeId::of::<T>())
                .ok_or(ContainerError::NotFound {
                    type_name: type_name::<T>(),
                })?;

        let instance = (registration.factory)(self)?;
        instance
            .downcast::<T>()
            .map(|instance| *instance)
            .map_err(|_| ContainerError::factory::<T>("factory produced a different type"))
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self
            .registrations
            .values()
            .map(|registration| registration.type_name)
            .collect();
        types.sort_unstable();
        f.debug_struct("Container").field("types", &types).finish()
    }
}

/// A named group of registrations, loaded with [`ContainerBuilder::load`].
pub struct Module {
    name: &'static str,
    register: Box<dyn FnOnce(&mut ContainerBuilder) + Send>,
}

impl Module {
    pub fn new(
        name: &'static str,
        register: impl FnOnce(&mut ContainerBuilder) + Send + 'static,
    ) -> Self {
        Self {
            name,
            register: Box::new(register),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct Counter(u32);

    #[test]
    fn test_resolve_runs_factory_each_time() {
        let calls = Arc::new(AtomicU32::new(0));
        let mut builder = ContainerBuilder::new();
        let factory_calls = calls.clone();
        builder.register(move |_| Ok(Counter(factory_calls.fetch_add(1, Ordering::SeqCst))));
        let container = builder.build();

        assert_eq!(container.resolve::<Counter>().unwrap(), Counter(0));
        assert_eq!(container.resolve::<Counter>().unwrap(), Counter(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut builder = ContainerBuilder::new();
        builder.register(|_| Ok(Counter(1)));
        builder.register(|_| Ok(Counter(2)));
        assert_eq!(builder.len(), 1);

        let container = builder.build();
        assert_eq!(container.resolve::<Counter>().unwrap(), Counter(2));
    }

    #[test]
    fn test_unregistered_type_is_not_found() {
        let container = ContainerBuilder::new().build();
        let err = container.resolve::<Counter>().unwrap_err();
        assert!(matches!(err, ContainerError::NotFound { type_name } if type_name.ends_with("Counter")));
        assert!(container.is_empty());
    }

    #[test]
    fn test_nested_resolution_failure_propagates() {
        struct Service(#[allow(dead_code)] Counter);

        let mut builder = ContainerBuilder::new();
        builder.register(|c| Ok(Service(c.resolve::<Counter>()?)));
        let container = builder.build();

        assert!(matches!(
            container.resolve::<Service>(),
            Err(ContainerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_modules_apply_their_registrations() {
        let module = Module::new("counters", |b| {
            b.register(|_| Ok(Counter(7)));
        });
        assert_eq!(module.name(), "counters");

        let mut builder = ContainerBuilder::new();
        builder.load(module);
        let container = builder.build();

        assert!(container.contains::<Counter>());
        assert_eq!(container.resolve::<Counter>().unwrap(), Counter(7));
    }
}
