//! Login use cases.

pub mod orchestrator;

pub use orchestrator::{LoginFlow, LoginFlowError};
