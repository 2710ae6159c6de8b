//! # Startup Sample
//!
//! Launches the application and renders the main screen to stdout.
//!
//! ```bash
//! cargo run -p startup-sample
//! RUST_LOG=debug cargo run -p startup-sample
//! ```

use startup_framework::BuildConfig;
use startup_sample::error::AppError;
use startup_sample::lifecycle::StartupApp;
use startup_sample::resources::{self, load_app_context};
use tracing::info;

fn main() -> Result<(), AppError> {
    let context = load_app_context(BuildConfig::default())?;
    let app = StartupApp::launch(context)?;
    let app_name = app.context().get_string(resources::APP_NAME)?;
    info!(app = %app_name, "Showing main screen");

    let screen = app.main_screen()?;
    screen.render(&mut std::io::stdout().lock())?;
    Ok(())
}
