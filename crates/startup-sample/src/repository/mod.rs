//! Data access for the main screen.

use crate::resources;
use startup_framework::{AppContext, ResourceError};

/// Reads the startup message from the platform's string table.
#[derive(Debug, Clone)]
pub struct MainRepository {
    context: AppContext,
}

impl MainRepository {
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    pub fn startup_message(&self) -> Result<String, ResourceError> {
        self.context.get_string(resources::STARTUP)
    }
}
