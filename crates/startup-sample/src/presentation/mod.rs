//! # Presentation
//!
//! The main screen and its view model. The screen never constructs the view
//! model itself; it resolves one from the container, which in turn resolves
//! the repository the view model needs.

pub mod screen;
pub mod view_model;

pub use screen::*;
pub use view_model::*;
