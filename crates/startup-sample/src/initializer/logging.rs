use crate::resources;
use startup_framework::tracing::setup_tracing;
use startup_framework::{BoxError, Initializer, StartupContext};
use tracing::debug;

/// Installs verbose diagnostic logging in debug builds. Does nothing in
/// release builds.
#[derive(Debug, Default)]
pub struct LoggingInitializer;

impl Initializer for LoggingInitializer {
    fn create(&self, ctx: &mut StartupContext) -> Result<(), BoxError> {
        let app = ctx.app();
        if app.config().debug {
            setup_tracing(true);
            debug!("{}", app.get_string(resources::INITIALIZED_LOGGING)?);
        }
        Ok(())
    }
}
