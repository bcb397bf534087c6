//! Registration use cases.
//!
//! This module exposes the registration flow controller.

pub mod orchestrator;

pub use orchestrator::{RegistrationFlow, RegistrationFlowError};
