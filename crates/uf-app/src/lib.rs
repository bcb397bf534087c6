//! userflow application orchestration layer
//!
//! This crate contains the flow controllers (use cases) and their wiring.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
