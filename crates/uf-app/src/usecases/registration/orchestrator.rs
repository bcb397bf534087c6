//! Registration flow controller.
//!
//! This module coordinates the registration state machine and its side effects:
//! the transient draft, committing the user, and navigation.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use uf_core::navigation::ScreenTarget;
use uf_core::ports::FlowEventPort;
use uf_core::registration::{
    CredentialPolicy, RegistrationAction, RegistrationEvent, RegistrationState,
    RegistrationStateMachine,
};
use uf_core::{FlowResult, RegistrationDraft, SecretString};

use crate::usecases::context::FlowContext;
use crate::usecases::navigation::NavigationDispatcher;
use crate::usecases::user_store::{UserStore, UserStoreError};

/// Errors produced by the registration flow.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationFlowError {
    #[error("register user failed: {0}")]
    RegisterUser(#[from] UserStoreError),
    #[error("{event} is not accepted in state {state:?}")]
    OutOfOrder {
        event: &'static str,
        state: RegistrationState,
    },
    #[error("registration draft missing")]
    DraftMissing,
}

/// Drives registration state and side effects.
pub struct RegistrationFlow {
    context: Arc<FlowContext<RegistrationState>>,
    draft: Mutex<Option<RegistrationDraft>>,

    policy: Arc<dyn CredentialPolicy>,
    user_store: Arc<UserStore>,
    navigation: Arc<NavigationDispatcher>,
    flow_events: Arc<dyn FlowEventPort>,
}

impl RegistrationFlow {
    pub fn new(
        policy: Arc<dyn CredentialPolicy>,
        user_store: Arc<UserStore>,
        navigation: Arc<NavigationDispatcher>,
        flow_events: Arc<dyn FlowEventPort>,
    ) -> Self {
        Self {
            context: FlowContext::default().arc(),
            draft: Mutex::new(None),
            policy,
            user_store,
            navigation,
            flow_events,
        }
    }

    /// Begin a fresh attempt on the details screen with an empty draft.
    pub async fn start(&self) -> RegistrationState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        *self.draft.lock().await = Some(RegistrationDraft::new());
        let state = RegistrationState::default();
        self.context.set_state(state.clone()).await;
        self.navigation
            .navigate(ScreenTarget::EnterDetails, false)
            .await;
        self.flow_events
            .emit_registration_state_changed(state.clone())
            .await;
        info!("registration started");
        state
    }

    pub async fn state(&self) -> RegistrationState {
        self.context.get_state().await
    }

    /// Username held in the current draft, if details were accepted.
    pub async fn drafted_username(&self) -> Option<String> {
        self.draft
            .lock()
            .await
            .as_ref()
            .filter(|draft| draft.has_details())
            .map(|draft| draft.username.clone())
    }

    /// Validate entered details. Success moves on to the terms screen; an
    /// error keeps the details screen with the error indicator shown.
    pub async fn validate_input(
        &self,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Result<FlowResult, RegistrationFlowError> {
        let state = self.context.get_state().await;
        if !matches!(state, RegistrationState::EnteringDetails { .. }) {
            return Err(RegistrationFlowError::OutOfOrder {
                event: "validate_input",
                state,
            });
        }
        let event = RegistrationEvent::SubmitDetails {
            username: username.into(),
            password: password.into(),
        };
        match self.dispatch(event).await? {
            RegistrationState::AwaitingTermsAcceptance => Ok(FlowResult::Success),
            RegistrationState::EnteringDetails { error: Some(error) } => {
                Ok(FlowResult::Error(error))
            }
            state => Err(RegistrationFlowError::OutOfOrder {
                event: "validate_input",
                state,
            }),
        }
    }

    /// Username or password text changed: hide the error indicator.
    pub async fn field_edited(&self) -> Result<RegistrationState, RegistrationFlowError> {
        self.dispatch(RegistrationEvent::FieldEdited).await
    }

    /// Accept terms: commit the draft and open Main.
    pub async fn accept_terms(&self) -> Result<RegistrationState, RegistrationFlowError> {
        let state = self.context.get_state().await;
        if state != RegistrationState::AwaitingTermsAcceptance {
            return Err(RegistrationFlowError::OutOfOrder {
                event: "accept_terms",
                state,
            });
        }
        self.dispatch(RegistrationEvent::AcceptTerms).await
    }

    /// Back pressed inside registration. Returns true when registration
    /// handled it by going back one step, false when registration was left.
    pub async fn back(&self) -> Result<bool, RegistrationFlowError> {
        let state = self.dispatch(RegistrationEvent::Back).await?;
        Ok(!state.is_terminal())
    }

    async fn dispatch(
        &self,
        event: RegistrationEvent,
    ) -> Result<RegistrationState, RegistrationFlowError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.registration.dispatch", event = event.name());
        async {
            let from = self.context.get_state().await;
            let event_name = event.name();
            let (next, actions) =
                RegistrationStateMachine::transition(from.clone(), event, self.policy.as_ref());
            info!(from = ?from, to = ?next, event = %event_name, "registration state transition");
            self.execute_actions(actions).await?;
            self.context.set_state(next.clone()).await;
            if next != from {
                self.flow_events
                    .emit_registration_state_changed(next.clone())
                    .await;
            }
            Ok(next)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
    ) -> Result<(), RegistrationFlowError> {
        for action in actions {
            debug!(?action, "registration executing action");
            match action {
                RegistrationAction::StoreDraft { username, password } => {
                    let mut draft = self.draft.lock().await;
                    draft
                        .get_or_insert_with(RegistrationDraft::new)
                        .set_details(username, password);
                }
                RegistrationAction::ShowTermsAndConditions => {
                    self.navigation
                        .navigate(ScreenTarget::TermsAndConditions, false)
                        .await;
                }
                RegistrationAction::ReturnToDetails => {
                    self.navigation.back().await;
                }
                RegistrationAction::RegisterUser => {
                    let mut guard = self.draft.lock().await;
                    let draft = guard.as_mut().ok_or(RegistrationFlowError::DraftMissing)?;
                    draft.accept_terms();
                    self.user_store.register_user(draft).await?;
                    // Committed: the draft is discarded.
                    guard.take();
                }
                RegistrationAction::NavigateToMain => {
                    self.navigation.navigate(ScreenTarget::Main, true).await;
                    self.flow_events
                        .emit_session_changed(self.user_store.session().await)
                        .await;
                }
                RegistrationAction::ExitRegistration => {
                    self.draft.lock().await.take();
                    // Pop the registration screens that are still on top.
                    while matches!(
                        self.navigation.current().await,
                        Some(ScreenTarget::EnterDetails | ScreenTarget::TermsAndConditions)
                    ) {
                        if !self.navigation.back().await {
                            break;
                        }
                    }
                    info!("registration abandoned");
                }
            }
        }
        Ok(())
    }
}
