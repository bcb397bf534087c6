mod support;

use std::sync::Arc;

use async_trait::async_trait;
use uf_app::usecases::RegistrationFlowError;
use uf_core::navigation::{NavigationCommand, ScreenTarget};
use uf_core::ports::UserStatePort;
use uf_core::registration::{MinLengthPolicy, RegistrationState};
use uf_core::{FlowError, FlowResult, UserState};
use uf_infra::InMemoryUserStateRepository;

use support::{build_app, build_app_with_policy, fast_params};

mockall::mock! {
    pub Store {}

    #[async_trait]
    impl UserStatePort for Store {
        async fn get_state(&self) -> anyhow::Result<UserState>;
        async fn set_state(&self, state: &UserState) -> anyhow::Result<()>;
        async fn reset(&self) -> anyhow::Result<()>;
    }
}

#[tokio::test]
async fn fresh_install_routes_to_registration_details() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;

    let target = h.app.entry.route().await;

    assert_eq!(target, ScreenTarget::Registration);
    assert_eq!(
        h.app.navigation.entries().await,
        vec![ScreenTarget::Registration, ScreenTarget::EnterDetails]
    );
    assert_eq!(
        h.app.registration.state().await,
        RegistrationState::EnteringDetails { error: None }
    );
    assert_eq!(
        h.navigator.commands.lock().unwrap().first(),
        Some(&NavigationCommand::NewRoot(ScreenTarget::Registration))
    );
}

#[tokio::test]
async fn empty_fields_are_rejected_and_editing_clears_the_error() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;
    h.app.entry.route().await;

    let result = h.app.registration.validate_input("", "secret").await.unwrap();
    assert!(matches!(result, FlowResult::Error(FlowError::Validation(_))));

    let result = h.app.registration.validate_input("alice", "").await.unwrap();
    assert!(matches!(result, FlowResult::Error(FlowError::Validation(_))));
    assert!(h.app.registration.state().await.error().is_some());

    let state = h.app.registration.field_edited().await.unwrap();
    assert_eq!(state, RegistrationState::EnteringDetails { error: None });
    assert_eq!(h.app.navigation.current().await, Some(ScreenTarget::EnterDetails));
}

#[tokio::test]
async fn valid_details_open_terms_and_keep_draft() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;
    h.app.entry.route().await;

    let result = h
        .app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();

    assert_eq!(result, FlowResult::Success);
    assert_eq!(
        h.app.registration.state().await,
        RegistrationState::AwaitingTermsAcceptance
    );
    assert_eq!(
        h.app.navigation.current().await,
        Some(ScreenTarget::TermsAndConditions)
    );
    assert_eq!(
        h.app.registration.drafted_username().await.as_deref(),
        Some("alice")
    );
    assert!(!h.app.user_store.is_user_registered().await);
}

#[tokio::test]
async fn accept_terms_persists_the_drafted_user_exactly_once() {
    let mut store = MockStore::new();
    store
        .expect_get_state()
        .times(1)
        .returning(|| Ok(UserState::default()));
    store
        .expect_set_state()
        .withf(|state: &UserState| {
            state.is_registered()
                && state.is_logged_in()
                && state.username() == Some("alice")
                && state
                    .credential()
                    .map(|credential| credential.verify("secret", fast_params()).unwrap())
                    .unwrap_or(false)
        })
        .times(1)
        .returning(|_| Ok(()));

    let h = build_app(Arc::new(store)).await;
    h.app.entry.route().await;
    h.app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();

    let state = h.app.registration.accept_terms().await.unwrap();

    assert_eq!(state, RegistrationState::Registered);
    assert!(h.app.user_store.is_user_registered().await);
    assert!(h.app.user_store.is_user_logged_in().await);
    assert_eq!(h.app.navigation.entries().await, vec![ScreenTarget::Main]);
    assert_eq!(
        h.app.main_screen.welcome_text().await.as_deref(),
        Some("Hello alice!")
    );
    assert_eq!(h.app.registration.drafted_username().await, None);
}

#[tokio::test]
async fn accept_terms_before_details_is_out_of_order() {
    let repo = Arc::new(InMemoryUserStateRepository::new());
    let h = build_app(repo.clone()).await;
    h.app.entry.route().await;

    let err = h.app.registration.accept_terms().await.unwrap_err();

    assert!(matches!(
        err,
        RegistrationFlowError::OutOfOrder {
            event: "accept_terms",
            ..
        }
    ));
    assert_eq!(repo.write_count().await, 0);
}

#[tokio::test]
async fn failed_commit_keeps_terms_screen_and_draft() {
    let mut store = MockStore::new();
    store
        .expect_get_state()
        .returning(|| Ok(UserState::default()));
    store
        .expect_set_state()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("disk full")));

    let h = build_app(Arc::new(store)).await;
    h.app.entry.route().await;
    h.app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();

    let err = h.app.registration.accept_terms().await.unwrap_err();

    assert!(matches!(err, RegistrationFlowError::RegisterUser(_)));
    assert_eq!(
        h.app.registration.state().await,
        RegistrationState::AwaitingTermsAcceptance
    );
    assert_eq!(
        h.app.registration.drafted_username().await.as_deref(),
        Some("alice")
    );
    assert!(!h.app.user_store.is_user_registered().await);
}

#[tokio::test]
async fn back_steps_from_terms_to_details_then_leaves_registration() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;
    h.app.entry.route().await;
    h.app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();

    assert!(h.app.registration.back().await.unwrap());
    assert_eq!(
        h.app.registration.state().await,
        RegistrationState::EnteringDetails { error: None }
    );
    assert_eq!(h.app.navigation.current().await, Some(ScreenTarget::EnterDetails));

    assert!(!h.app.registration.back().await.unwrap());
    assert_eq!(h.app.registration.state().await, RegistrationState::Abandoned);
    assert_eq!(h.app.registration.drafted_username().await, None);
    assert_eq!(
        h.app.navigation.entries().await,
        vec![ScreenTarget::Registration]
    );
    assert!(!h.app.navigation.back().await);
}

#[tokio::test]
async fn min_length_policy_rejects_short_username() {
    let h = build_app_with_policy(
        Arc::new(InMemoryUserStateRepository::new()),
        Arc::new(MinLengthPolicy { min_len: 5 }),
    )
    .await;
    h.app.entry.route().await;

    let result = h
        .app
        .registration
        .validate_input("bob", "longenough")
        .await
        .unwrap();

    assert_eq!(
        result,
        FlowResult::Error(FlowError::validation(
            "Username has to be longer than 4 characters"
        ))
    );
}

#[tokio::test]
async fn registration_state_changes_are_emitted() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;
    h.app.entry.route().await;
    h.app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();
    h.app.registration.accept_terms().await.unwrap();

    let emitted = h.flow_events.registration.lock().unwrap().clone();
    assert_eq!(
        emitted,
        vec![
            RegistrationState::EnteringDetails { error: None },
            RegistrationState::AwaitingTermsAcceptance,
            RegistrationState::Registered,
        ]
    );
    let sessions = h.flow_events.sessions.lock().unwrap().clone();
    assert_eq!(
        sessions.last().cloned().flatten().map(|s| s.username),
        Some("alice".to_string())
    );
}

#[tokio::test]
async fn details_resubmitted_on_terms_screen_are_out_of_order() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;
    h.app.entry.route().await;
    h.app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();

    let err = h.app.registration.validate_input("", "").await.unwrap_err();

    assert!(matches!(
        err,
        RegistrationFlowError::OutOfOrder {
            event: "validate_input",
            state: RegistrationState::AwaitingTermsAcceptance,
        }
    ));
    assert_eq!(
        h.app.registration.state().await,
        RegistrationState::AwaitingTermsAcceptance
    );
    assert_eq!(
        h.app.registration.drafted_username().await.as_deref(),
        Some("alice")
    );
}

#[tokio::test]
async fn details_after_registration_are_out_of_order() {
    let h = build_app(Arc::new(InMemoryUserStateRepository::new())).await;
    h.app.entry.route().await;
    h.app
        .registration
        .validate_input("alice", "secret")
        .await
        .unwrap();
    h.app.registration.accept_terms().await.unwrap();

    let err = h
        .app
        .registration
        .validate_input("bob", "secret")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RegistrationFlowError::OutOfOrder {
            state: RegistrationState::Registered,
            ..
        }
    ));
    assert_eq!(h.app.navigation.entries().await, vec![ScreenTarget::Main]);
}
