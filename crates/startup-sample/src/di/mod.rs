//! # Container Modules
//!
//! Registrations grouped by layer. Both modules use factory scope: every
//! resolution builds a fresh instance.
//!
//! | Type | Factory needs |
//! |------|---------------|
//! | [`MainRepository`] | [`AppContext`] |
//! | [`MainViewModel`] | [`MainRepository`] |

use crate::presentation::MainViewModel;
use crate::repository::MainRepository;
use startup_framework::{AppContext, ContainerError, Module};

pub fn repository_module() -> Module {
    Module::new("repository", |container| {
        container.register(|c| Ok(MainRepository::new(c.resolve::<AppContext>()?)));
    })
}

pub fn view_model_module() -> Module {
    Module::new("view_model", |container| {
        container.register(|c| {
            MainViewModel::new(c.resolve::<MainRepository>()?)
                .map_err(ContainerError::factory::<MainViewModel>)
        });
    })
}
