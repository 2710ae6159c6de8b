use crate::initializer::{ContainerInitializer, LoggingInitializer};
use crate::presentation::MainScreen;
use startup_framework::{
    AppContext, Container, ContainerError, StartupContext, StartupError, StartupScheduler,
    TaskGraph,
};
use std::sync::Arc;
use tracing::info;

/// The running application: the platform context plus the ready container.
///
/// `StartupApp` is responsible for:
/// - **Startup**: Running every initializer in dependency order
/// - **Freezing**: Turning the populated builder into a read-only container
/// - **Screen creation**: Handing the container to presentation code
///
/// # Example
///
/// ```rust
/// use startup_framework::BuildConfig;
/// use startup_sample::lifecycle::StartupApp;
/// use startup_sample::resources::load_app_context;
///
/// let context = load_app_context(BuildConfig { debug: false }).unwrap();
/// let app = StartupApp::launch(context).unwrap();
///
/// let screen = app.main_screen().unwrap();
/// assert_eq!(screen.text(), "Hello, App Startup!");
/// ```
pub struct StartupApp {
    context: AppContext,
    container: Arc<Container>,
}

impl StartupApp {
    /// The fixed set of startup tasks.
    ///
    /// Registered in an arbitrary order; the scheduler sorts them.
    pub fn startup_graph() -> Result<TaskGraph, StartupError> {
        let mut graph = TaskGraph::new();
        graph.add(ContainerInitializer)?;
        graph.add(LoggingInitializer)?;
        Ok(graph)
    }

    /// Runs startup and returns the ready application.
    ///
    /// # Errors
    ///
    /// Any [`StartupError`]. These are configuration errors: the caller is
    /// expected to abort the process rather than retry.
    pub fn launch(context: AppContext) -> Result<Self, StartupError> {
        let mut scheduler = StartupScheduler::new(Self::startup_graph()?);
        let mut startup = StartupContext::new(context);
        scheduler.run_all(&mut startup)?;

        let (context, container) = startup.finish();
        info!(registrations = container.len(), "Application ready");
        Ok(Self {
            context,
            container: Arc::new(container),
        })
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn main_screen(&self) -> Result<MainScreen, ContainerError> {
        MainScreen::create(&self.container)
    }
}
