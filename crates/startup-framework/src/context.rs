//! # Platform & Startup Context
//!
//! [`AppContext`] is the platform handle that initializers and repositories
//! read from: the build configuration and the string resource table. It is
//! cheap to clone and is registered into the container so factories can ask
//! for it like any other dependency.
//!
//! [`StartupContext`] is the bootstrap object threaded through every
//! initializer. It owns the [`ContainerBuilder`] while startup is in progress
//! and is consumed by [`StartupContext::finish`] once every task has run.

use crate::container::{Container, ContainerBuilder};
use crate::error::ResourceError;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Build-time switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Enables verbose diagnostic logging.
    pub debug: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            debug: cfg!(debug_assertions),
        }
    }
}

/// Read-only string table keyed by identifier.
///
/// Parsed from a flat TOML table:
///
/// ```toml
/// app_name = "Startup"
/// startup = "Hello, Startup!"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StringResources {
    strings: HashMap<String, String>,
}

impl StringResources {
    pub fn from_toml_str(source: &str) -> Result<Self, ResourceError> {
        toml::from_str(source).map_err(|e| ResourceError::Parse(e.to_string()))
    }

    pub fn get(&self, id: &str) -> Result<&str, ResourceError> {
        self.strings
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| ResourceError::Missing(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringResources {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug)]
struct AppContextInner {
    config: BuildConfig,
    resources: StringResources,
}

/// Process-scoped platform handle.
#[derive(Debug, Clone)]
pub struct AppContext {
    inner: Arc<AppContextInner>,
}

impl AppContext {
    pub fn new(config: BuildConfig, resources: StringResources) -> Self {
        Self {
            inner: Arc::new(AppContextInner { config, resources }),
        }
    }

    pub fn config(&self) -> BuildConfig {
        self.inner.config
    }

    pub fn resources(&self) -> &StringResources {
        &self.inner.resources
    }

    /// Shorthand for `resources().get(id)`, returning an owned string.
    pub fn get_string(&self, id: &str) -> Result<String, ResourceError> {
        self.inner.resources.get(id).map(str::to_owned)
    }
}

/// Mutable state handed to each [`Initializer`](crate::Initializer) while startup runs.
pub struct StartupContext {
    app: AppContext,
    container: ContainerBuilder,
}

impl StartupContext {
    pub fn new(app: AppContext) -> Self {
        Self {
            app,
            container: ContainerBuilder::new(),
        }
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// The container being populated. Only reachable during startup.
    pub fn container(&mut self) -> &mut ContainerBuilder {
        &mut self.container
    }

    /// Ends startup, freezing the registrations into a read-only [`Container`].
    pub fn finish(self) -> (AppContext, Container) {
        (self.app, self.container.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flat_string_table() {
        let resources = StringResources::from_toml_str(
            r#"
            app_name = "Startup"
            startup = "Hello"
            "#,
        )
        .unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources.get("startup").unwrap(), "Hello");
        assert_eq!(
            resources.get("missing"),
            Err(ResourceError::Missing("missing".to_string()))
        );
    }

    #[test]
    fn test_rejects_nested_tables() {
        let err = StringResources::from_toml_str("[section]\nkey = \"v\"").unwrap_err();
        assert!(matches!(err, ResourceError::Parse(_)));
    }

    #[test]
    fn test_app_context_clones_share_resources() {
        let ctx = AppContext::new(
            BuildConfig { debug: false },
            [("startup", "Hi")].into_iter().collect(),
        );
        let clone = ctx.clone();
        assert_eq!(clone.get_string("startup").unwrap(), "Hi");
        assert!(!clone.config().debug);
    }
}
