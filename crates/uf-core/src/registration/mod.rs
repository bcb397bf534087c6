//! Registration domain module.
//!
//! This module defines the multi-step registration state machine
//! (enter details → accept terms → registered) and the input policies it
//! validates details with.

pub mod policy;
pub mod state_machine;

pub use policy::{CredentialPolicy, MinLengthPolicy, NonEmptyPolicy, PolicyKind};
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
};
