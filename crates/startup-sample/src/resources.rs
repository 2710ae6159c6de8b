//! # String Resources
//!
//! The application's string table, embedded at compile time from
//! `res/strings.toml`, plus the identifiers used to look entries up.

use startup_framework::{AppContext, BuildConfig, ResourceError, StringResources};

const STRINGS: &str = include_str!("../res/strings.toml");

pub const APP_NAME: &str = "app_name";
pub const STARTUP: &str = "startup";
pub const INITIALIZED_LOGGING: &str = "initialized_logging";
pub const INITIALIZED_CONTAINER: &str = "initialized_container";

/// Parses the embedded string table.
pub fn embedded_strings() -> Result<StringResources, ResourceError> {
    StringResources::from_toml_str(STRINGS)
}

/// Builds the platform context from the embedded string table.
pub fn load_app_context(config: BuildConfig) -> Result<AppContext, ResourceError> {
    Ok(AppContext::new(config, embedded_strings()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_has_every_id() {
        let strings = embedded_strings().unwrap();
        for id in [APP_NAME, STARTUP, INITIALIZED_LOGGING, INITIALIZED_CONTAINER] {
            assert!(strings.get(id).is_ok(), "missing {id}");
        }
    }
}
