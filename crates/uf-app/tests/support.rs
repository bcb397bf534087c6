//! Shared test doubles for the flow integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uf_app::{App, AppDeps};
use uf_core::credential::CredentialParams;
use uf_core::login::LoginScreenState;
use uf_core::navigation::{NavigationCommand, ScreenTarget};
use uf_core::ports::{FlowEventPort, NavigatorPort, NotificationCounterPort, UserStatePort};
use uf_core::registration::{CredentialPolicy, NonEmptyPolicy, RegistrationState};
use uf_core::UserSession;

pub fn fast_params() -> CredentialParams {
    CredentialParams {
        m_cost: 256,
        t_cost: 1,
        p_cost: 1,
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub commands: Mutex<Vec<NavigationCommand>>,
}

#[async_trait]
impl NavigatorPort for RecordingNavigator {
    async fn apply(&self, command: NavigationCommand, _history: &[ScreenTarget]) {
        self.commands.lock().unwrap().push(command);
    }
}

#[derive(Default)]
pub struct RecordingFlowEvents {
    pub registration: Mutex<Vec<RegistrationState>>,
    pub login: Mutex<Vec<LoginScreenState>>,
    pub sessions: Mutex<Vec<Option<UserSession>>>,
}

#[async_trait]
impl FlowEventPort for RecordingFlowEvents {
    async fn emit_registration_state_changed(&self, state: RegistrationState) {
        self.registration.lock().unwrap().push(state);
    }

    async fn emit_login_state_changed(&self, state: LoginScreenState) {
        self.login.lock().unwrap().push(state);
    }

    async fn emit_session_changed(&self, session: Option<UserSession>) {
        self.sessions.lock().unwrap().push(session);
    }
}

/// Counts up from `start` on every read.
pub struct SequenceCounter {
    next: AtomicU32,
}

impl SequenceCounter {
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }
}

impl NotificationCounterPort for SequenceCounter {
    fn unread_count(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

pub struct Harness {
    pub app: App,
    pub navigator: Arc<RecordingNavigator>,
    pub flow_events: Arc<RecordingFlowEvents>,
}

pub async fn build_app(user_state: Arc<dyn UserStatePort>) -> Harness {
    build_app_with_policy(user_state, Arc::new(NonEmptyPolicy)).await
}

pub async fn build_app_with_policy(
    user_state: Arc<dyn UserStatePort>,
    policy: Arc<dyn CredentialPolicy>,
) -> Harness {
    let navigator = Arc::new(RecordingNavigator::default());
    let flow_events = Arc::new(RecordingFlowEvents::default());
    let app = App::build(AppDeps {
        user_state,
        navigator: navigator.clone(),
        flow_events: flow_events.clone(),
        notifications: Arc::new(SequenceCounter::starting_at(3)),
        policy,
        credential_params: fast_params(),
    })
    .await
    .expect("build app");
    Harness {
        app,
        navigator,
        flow_events,
    }
}
