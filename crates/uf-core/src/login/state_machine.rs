//! Login screen state machine.

use serde::Serialize;

use crate::flow::FlowError;
use crate::security::SecretString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LoginPhase {
    #[default]
    AwaitingCredentials,
    LoggedIn,
    Unregistered,
}

/// What the login screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoginScreenState {
    /// Pre-filled with the last known username.
    pub username: Option<String>,
    /// Always false: single-user device.
    pub username_editable: bool,
    pub error: Option<FlowError>,
    pub phase: LoginPhase,
}

impl LoginScreenState {
    pub fn prefilled(username: Option<String>) -> Self {
        Self {
            username,
            username_editable: false,
            error: None,
            phase: LoginPhase::AwaitingCredentials,
        }
    }

    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug)]
pub enum LoginEvent {
    Submit {
        username: String,
        password: SecretString,
    },
    PasswordEdited,
    AuthSucceeded,
    AuthFailed { error: FlowError },
    Unregister,
}

impl LoginEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LoginEvent::Submit { .. } => "Submit",
            LoginEvent::PasswordEdited => "PasswordEdited",
            LoginEvent::AuthSucceeded => "AuthSucceeded",
            LoginEvent::AuthFailed { .. } => "AuthFailed",
            LoginEvent::Unregister => "Unregister",
        }
    }
}

#[derive(Debug)]
pub enum LoginAction {
    /// Check the credential against the user store.
    Authenticate {
        username: String,
        password: SecretString,
    },
    /// Open Main, clearing history.
    NavigateToMain,
    /// Remove the registration from the user store.
    UnregisterUser,
    /// Open Registration, clearing history.
    NavigateToRegistration,
}

pub struct LoginStateMachine;

impl LoginStateMachine {
    pub fn transition(
        state: LoginScreenState,
        event: LoginEvent,
    ) -> (LoginScreenState, Vec<LoginAction>) {
        if state.phase != LoginPhase::AwaitingCredentials {
            return (state, Vec::new());
        }
        match event {
            LoginEvent::Submit { username, password } => (
                state,
                vec![LoginAction::Authenticate { username, password }],
            ),
            LoginEvent::PasswordEdited => (
                LoginScreenState {
                    error: None,
                    ..state
                },
                Vec::new(),
            ),
            LoginEvent::AuthSucceeded => (
                LoginScreenState {
                    error: None,
                    phase: LoginPhase::LoggedIn,
                    ..state
                },
                vec![LoginAction::NavigateToMain],
            ),
            LoginEvent::AuthFailed { error } => (
                LoginScreenState {
                    error: Some(error),
                    ..state
                },
                Vec::new(),
            ),
            LoginEvent::Unregister => (
                LoginScreenState {
                    username: None,
                    error: None,
                    phase: LoginPhase::Unregistered,
                    ..state
                },
                vec![
                    LoginAction::UnregisterUser,
                    LoginAction::NavigateToRegistration,
                ],
            ),
        }
    }
}
