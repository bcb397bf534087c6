//! # uf-core
//!
//! Core domain models and state machines for the registration / login /
//! settings flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod credential;
pub mod entry;
pub mod flow;
pub mod login;
pub mod navigation;
pub mod ports;
pub mod registration;
pub mod security;
pub mod user;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use entry::EntryRoute;
pub use flow::{FlowError, FlowResult};
pub use navigation::{NavigationCommand, NavigationHistory, ScreenTarget};
pub use security::SecretString;
pub use user::{RegistrationDraft, UserSession, UserState};
