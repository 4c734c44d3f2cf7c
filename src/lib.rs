// Library surface for headless/integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod input;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod timer;
pub mod ui;

pub use app::App;
