//! Registration state machine.
//!
//! Defines a pure state transition function for the registration flow.

use serde::Serialize;

use super::policy::CredentialPolicy;
use crate::flow::FlowError;
use crate::security::SecretString;

/// Registration flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RegistrationState {
    /// Username/password input, with the error indicator when set.
    EnteringDetails { error: Option<FlowError> },
    /// Details accepted; terms and conditions shown.
    AwaitingTermsAcceptance,
    /// User registered and logged in.
    Registered,
    /// Back pressed from the first step; registration left.
    Abandoned,
}

impl Default for RegistrationState {
    fn default() -> Self {
        RegistrationState::EnteringDetails { error: None }
    }
}

impl RegistrationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RegistrationState::Registered | RegistrationState::Abandoned
        )
    }

    pub fn error(&self) -> Option<&FlowError> {
        match self {
            RegistrationState::EnteringDetails { error } => error.as_ref(),
            _ => None,
        }
    }
}

/// Events that drive the registration flow.
#[derive(Debug)]
pub enum RegistrationEvent {
    /// "Next" pressed on the details screen.
    SubmitDetails {
        username: String,
        password: SecretString,
    },
    /// Username or password text changed.
    FieldEdited,
    /// Terms accepted.
    AcceptTerms,
    /// Navigate back.
    Back,
}

impl RegistrationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationEvent::SubmitDetails { .. } => "SubmitDetails",
            RegistrationEvent::FieldEdited => "FieldEdited",
            RegistrationEvent::AcceptTerms => "AcceptTerms",
            RegistrationEvent::Back => "Back",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug)]
pub enum RegistrationAction {
    /// Keep validated details in the draft.
    StoreDraft {
        username: String,
        password: SecretString,
    },
    /// Push the terms screen.
    ShowTermsAndConditions,
    /// Pop back to the details screen.
    ReturnToDetails,
    /// Commit the draft into the user store.
    RegisterUser,
    /// Open Main, clearing registration history.
    NavigateToMain,
    /// Discard the draft and leave registration.
    ExitRegistration,
}

/// Pure state machine: no side effects.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: RegistrationState,
        event: RegistrationEvent,
        policy: &dyn CredentialPolicy,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        match (state, event) {
            (
                RegistrationState::EnteringDetails { .. },
                RegistrationEvent::SubmitDetails { username, password },
            ) => match policy.validate(&username, password.expose()) {
                Err(error) => (
                    RegistrationState::EnteringDetails { error: Some(error) },
                    Vec::new(),
                ),
                Ok(()) => (
                    RegistrationState::AwaitingTermsAcceptance,
                    vec![
                        RegistrationAction::StoreDraft { username, password },
                        RegistrationAction::ShowTermsAndConditions,
                    ],
                ),
            },
            (RegistrationState::EnteringDetails { .. }, RegistrationEvent::FieldEdited) => {
                (RegistrationState::EnteringDetails { error: None }, Vec::new())
            }
            (RegistrationState::EnteringDetails { .. }, RegistrationEvent::Back) => (
                RegistrationState::Abandoned,
                vec![RegistrationAction::ExitRegistration],
            ),
            (RegistrationState::AwaitingTermsAcceptance, RegistrationEvent::AcceptTerms) => (
                RegistrationState::Registered,
                vec![
                    RegistrationAction::RegisterUser,
                    RegistrationAction::NavigateToMain,
                ],
            ),
            (RegistrationState::AwaitingTermsAcceptance, RegistrationEvent::Back) => (
                RegistrationState::EnteringDetails { error: None },
                vec![RegistrationAction::ReturnToDetails],
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
