//! Top-level error for the binary.

use startup_framework::{ContainerError, ResourceError, StartupError};
use thiserror::Error;

/// Everything that can abort the application at launch.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load resources: {0}")]
    Resources(#[from] ResourceError),

    #[error("Startup failed: {0}")]
    Startup(#[from] StartupError),

    #[error("Failed to create screen: {0}")]
    Screen(#[from] ContainerError),

    #[error("Failed to render: {0}")]
    Render(#[from] std::io::Error),
}
