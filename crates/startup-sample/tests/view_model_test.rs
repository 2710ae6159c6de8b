use startup_framework::{AppContext, BuildConfig, Container, ContainerBuilder};
use startup_sample::di::{repository_module, view_model_module};
use startup_sample::presentation::{MainScreen, MainViewModel};
use startup_sample::resources::STARTUP;

/// Builds the presentation graph against a hand-made context, without running startup.
fn container_with_message(message: &str) -> Container {
    let context = AppContext::new(
        BuildConfig { debug: false },
        [(STARTUP, message)].into_iter().collect(),
    );

    let mut builder = ContainerBuilder::new();
    builder
        .register_instance(context)
        .load(repository_module())
        .load(view_model_module());
    builder.build()
}

#[test]
fn test_view_model_exposes_repository_message() {
    let container = container_with_message("Stubbed");

    let view_model = container.resolve::<MainViewModel>().unwrap();
    assert_eq!(view_model.message().current(), "Stubbed");
}

#[tokio::test]
async fn test_each_resolution_builds_a_new_view_model() {
    let container = container_with_message("Stubbed");
    let first = container.resolve::<MainViewModel>().unwrap();
    let second = container.resolve::<MainViewModel>().unwrap();
    let mut first_messages = first.message();

    // Dropping one view model ends only its own stream.
    drop(first);
    assert_eq!(first_messages.changed().await, None);
    assert_eq!(first_messages.current(), "Stubbed");
    assert_eq!(second.message().current(), "Stubbed");
}

#[test]
fn test_screen_binds_to_resolved_view_model() {
    let container = container_with_message("Bound");
    let screen = MainScreen::create(&container).unwrap();

    let mut out = Vec::new();
    screen.render(&mut out).unwrap();
    assert_eq!(out, b"Bound\n");
}
