use super::MainViewModel;
use startup_framework::{Container, ContainerError, Subscription};
use std::io::{self, Write};

/// The application's only screen: a single line of text bound to
/// [`MainViewModel`]'s message.
#[derive(Debug)]
pub struct MainScreen {
    // Owning the view model keeps the message observable alive.
    _view_model: MainViewModel,
    message: Subscription<String>,
}

impl MainScreen {
    /// Resolves the view model from the ready container and binds to it.
    pub fn create(container: &Container) -> Result<Self, ContainerError> {
        let view_model = container.resolve::<MainViewModel>()?;
        let message = view_model.message();
        Ok(Self {
            _view_model: view_model,
            message,
        })
    }

    pub fn text(&self) -> String {
        self.message.current()
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.text())
    }
}
