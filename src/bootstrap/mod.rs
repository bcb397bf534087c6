pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_default};
pub use run::run_app;
pub use wiring::{resolve_app_dirs, wire_dependencies};
