use super::LoggingInitializer;
use crate::di::{repository_module, view_model_module};
use crate::resources;
use startup_framework::{BoxError, Initializer, StartupContext, TaskId};
use tracing::debug;

/// Populates the injection container: the platform context first, then the
/// application modules.
#[derive(Debug, Default)]
pub struct ContainerInitializer;

impl Initializer for ContainerInitializer {
    fn dependencies(&self) -> Vec<TaskId> {
        vec![TaskId::of::<LoggingInitializer>()]
    }

    fn create(&self, ctx: &mut StartupContext) -> Result<(), BoxError> {
        let app = ctx.app().clone();
        ctx.container()
            .register_instance(app.clone())
            .load(repository_module())
            .load(view_model_module());

        debug!("{}", app.get_string(resources::INITIALIZED_CONTAINER)?);
        Ok(())
    }
}
