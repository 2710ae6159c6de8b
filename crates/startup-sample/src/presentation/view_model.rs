use crate::repository::MainRepository;
use startup_framework::{Observable, ResourceError, Subscription};
use tracing::debug;

/// State holder for the main screen.
///
/// Reads the startup message once, on construction, and exposes it as an
/// observable value.
#[derive(Debug)]
pub struct MainViewModel {
    message: Observable<String>,
}

impl MainViewModel {
    pub fn new(repository: MainRepository) -> Result<Self, ResourceError> {
        let message = repository.startup_message()?;
        debug!(%message, "MainViewModel created");
        Ok(Self {
            message: Observable::new(message),
        })
    }

    /// Read-only stream of the message.
    pub fn message(&self) -> Subscription<String> {
        self.message.subscribe()
    }
}
