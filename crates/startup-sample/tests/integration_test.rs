use startup_framework::{
    AppContext, BuildConfig, ContainerError, StartupError, StringResources, TaskId,
};
use startup_sample::initializer::{ContainerInitializer, LoggingInitializer};
use startup_sample::lifecycle::StartupApp;
use startup_sample::presentation::MainViewModel;
use startup_sample::repository::MainRepository;
use startup_sample::resources::{self, load_app_context};

fn release_context() -> AppContext {
    load_app_context(BuildConfig { debug: false }).expect("embedded strings must parse")
}

/// Full end-to-end test: startup, container, view model, screen.
#[test]
fn test_launch_renders_startup_message() {
    let app = StartupApp::launch(release_context()).expect("Failed to launch");

    let screen = app.main_screen().expect("Failed to create screen");
    assert_eq!(screen.text(), "Hello, App Startup!");

    let mut out = Vec::new();
    screen.render(&mut out).expect("Failed to render");
    assert_eq!(String::from_utf8(out).unwrap(), "Hello, App Startup!\n");
}

#[test]
fn test_logging_runs_before_container() {
    let order = StartupApp::startup_graph()
        .unwrap()
        .resolve_order()
        .unwrap();

    assert_eq!(
        order,
        [
            TaskId::of::<LoggingInitializer>(),
            TaskId::of::<ContainerInitializer>()
        ]
    );
}

#[test]
fn test_container_holds_every_layer() {
    let app = StartupApp::launch(release_context()).unwrap();
    let container = app.container();

    assert!(container.contains::<AppContext>());
    assert!(container.contains::<MainRepository>());
    assert!(container.contains::<MainViewModel>());
    assert_eq!(container.len(), 3);

    let repository = container.resolve::<MainRepository>().unwrap();
    assert_eq!(repository.startup_message().unwrap(), "Hello, App Startup!");
}

#[test]
fn test_debug_build_launches_with_logging() {
    let context = load_app_context(BuildConfig { debug: true }).unwrap();
    let app = StartupApp::launch(context).unwrap();
    assert!(app.context().config().debug);
    assert_eq!(app.main_screen().unwrap().text(), "Hello, App Startup!");
}

#[test]
fn test_missing_container_message_fails_startup() {
    let strings: StringResources = [(resources::STARTUP, "hi")].into_iter().collect();
    let context = AppContext::new(BuildConfig { debug: false }, strings);

    let err = StartupApp::launch(context).err().expect("launch should fail");

    assert!(matches!(
        err,
        StartupError::TaskFailed { task, .. } if task == TaskId::of::<ContainerInitializer>()
    ));
}

#[test]
fn test_missing_startup_string_fails_screen_creation() {
    let strings: StringResources = [(resources::INITIALIZED_CONTAINER, "ready")]
        .into_iter()
        .collect();
    let app = StartupApp::launch(AppContext::new(BuildConfig { debug: false }, strings)).unwrap();

    let err = app.main_screen().err().expect("screen creation should fail");

    assert!(matches!(
        err,
        ContainerError::Factory { type_name, .. } if type_name.ends_with("MainViewModel")
    ));
}
