//! Login flow controller.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use uf_core::login::{LoginAction, LoginEvent, LoginPhase, LoginScreenState, LoginStateMachine};
use uf_core::navigation::ScreenTarget;
use uf_core::ports::FlowEventPort;
use uf_core::{FlowResult, SecretString};

use crate::usecases::context::FlowContext;
use crate::usecases::navigation::NavigationDispatcher;
use crate::usecases::registration::RegistrationFlow;
use crate::usecases::user_store::{UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum LoginFlowError {
    #[error("user store failed: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("login screen is not awaiting credentials")]
    NotAwaitingCredentials,
}

pub struct LoginFlow {
    context: Arc<FlowContext<LoginScreenState>>,

    user_store: Arc<UserStore>,
    navigation: Arc<NavigationDispatcher>,
    registration: Arc<RegistrationFlow>,
    flow_events: Arc<dyn FlowEventPort>,
}

impl LoginFlow {
    pub fn new(
        user_store: Arc<UserStore>,
        navigation: Arc<NavigationDispatcher>,
        registration: Arc<RegistrationFlow>,
        flow_events: Arc<dyn FlowEventPort>,
    ) -> Self {
        Self {
            context: FlowContext::default().arc(),
            user_store,
            navigation,
            registration,
            flow_events,
        }
    }

    /// Reset the screen: username pre-filled with the last known one and locked.
    pub async fn enter(&self) -> LoginScreenState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let state = LoginScreenState::prefilled(self.user_store.username().await);
        self.context.set_state(state.clone()).await;
        self.flow_events.emit_login_state_changed(state.clone()).await;
        state
    }

    pub async fn state(&self) -> LoginScreenState {
        self.context.get_state().await
    }

    /// Check credentials. Success opens Main with history cleared; an error
    /// shows the indicator and keeps the fields editable.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Result<FlowResult, LoginFlowError> {
        if self.context.get_state().await.phase != LoginPhase::AwaitingCredentials {
            return Err(LoginFlowError::NotAwaitingCredentials);
        }
        let state = self
            .dispatch(LoginEvent::Submit {
                username: username.into(),
                password: password.into(),
            })
            .await?;
        match (state.phase, state.error) {
            (LoginPhase::LoggedIn, _) => Ok(FlowResult::Success),
            (LoginPhase::AwaitingCredentials, Some(error)) => Ok(FlowResult::Error(error)),
            _ => Err(LoginFlowError::NotAwaitingCredentials),
        }
    }

    /// Any password edit hides the error indicator immediately.
    pub async fn password_edited(&self) -> Result<LoginScreenState, LoginFlowError> {
        self.dispatch(LoginEvent::PasswordEdited).await
    }

    /// Forget the registered user and start registration over.
    pub async fn unregister(&self) -> Result<(), LoginFlowError> {
        let state = self.dispatch(LoginEvent::Unregister).await?;
        if state.phase != LoginPhase::Unregistered {
            return Err(LoginFlowError::NotAwaitingCredentials);
        }
        Ok(())
    }

    async fn dispatch(&self, event: LoginEvent) -> Result<LoginScreenState, LoginFlowError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.login.dispatch", event = event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = event.name();
                let (next, actions) = LoginStateMachine::transition(current, event);
                info!(from = ?from.phase, to = ?next.phase, error = ?next.error, event = %event_name, "login state transition");
                let follow_up_events = self.execute_actions(actions).await?;
                self.context.set_state(next.clone()).await;
                if next != from {
                    self.flow_events.emit_login_state_changed(next.clone()).await;
                }
                current = next;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<LoginAction>,
    ) -> Result<Vec<LoginEvent>, LoginFlowError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "login executing action");
            match action {
                LoginAction::Authenticate { username, password } => {
                    match self.user_store.login(&username, &password).await? {
                        FlowResult::Success => follow_up_events.push(LoginEvent::AuthSucceeded),
                        FlowResult::Error(error) => {
                            follow_up_events.push(LoginEvent::AuthFailed { error })
                        }
                    }
                }
                LoginAction::NavigateToMain => {
                    self.navigation.navigate(ScreenTarget::Main, true).await;
                    self.flow_events
                        .emit_session_changed(self.user_store.session().await)
                        .await;
                }
                LoginAction::UnregisterUser => {
                    self.user_store.unregister().await?;
                    self.flow_events.emit_session_changed(None).await;
                }
                LoginAction::NavigateToRegistration => {
                    self.navigation
                        .navigate(ScreenTarget::Registration, true)
                        .await;
                    self.registration.start().await;
                }
            }
        }
        Ok(follow_up_events)
    }
}
