//! Login domain module.

pub mod state_machine;

pub use state_machine::{LoginAction, LoginEvent, LoginPhase, LoginScreenState, LoginStateMachine};
