//! UserState store.
//!
//! Holds the in-memory user record, persists it through [`UserStatePort`]
//! after each mutation, and owns the logged-in [`UserSession`].

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use uf_core::credential::{Credential, CredentialError, CredentialParams};
use uf_core::ports::{NotificationCounterPort, UserStatePort};
use uf_core::{FlowError, FlowResult, RegistrationDraft, SecretString, UserSession, UserState};

#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    #[error("registration draft is missing username or password")]
    IncompleteDraft,
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),
    #[error("persist user state failed: {0}")]
    Persistence(#[from] anyhow::Error),
}

pub struct UserStore {
    user_state: Arc<dyn UserStatePort>,
    notifications: Arc<dyn NotificationCounterPort>,
    credential_params: CredentialParams,
    state: Mutex<UserState>,
    session: Mutex<Option<UserSession>>,
}

impl UserStore {
    /// Load the stored user record and, when it says logged in, open a session.
    pub async fn load(
        user_state: Arc<dyn UserStatePort>,
        notifications: Arc<dyn NotificationCounterPort>,
        credential_params: CredentialParams,
    ) -> Result<Self, UserStoreError> {
        let state = user_state.get_state().await?;
        let session = match (state.is_logged_in(), state.username()) {
            (true, Some(username)) => Some(UserSession::new(username, notifications.unread_count())),
            _ => None,
        };
        info!(
            registered = state.is_registered(),
            logged_in = state.is_logged_in(),
            "user state loaded"
        );
        Ok(Self {
            user_state,
            notifications,
            credential_params,
            state: Mutex::new(state),
            session: Mutex::new(session),
        })
    }

    pub async fn is_user_registered(&self) -> bool {
        self.state.lock().await.is_registered()
    }

    pub async fn is_user_logged_in(&self) -> bool {
        self.state.lock().await.is_logged_in()
    }

    /// Last known username.
    pub async fn username(&self) -> Option<String> {
        self.state.lock().await.username().map(str::to_string)
    }

    pub async fn snapshot(&self) -> UserState {
        self.state.lock().await.clone()
    }

    pub async fn session(&self) -> Option<UserSession> {
        self.session.lock().await.clone()
    }

    /// Commit a completed draft: the user becomes registered and logged in.
    pub async fn register_user(&self, draft: &RegistrationDraft) -> Result<(), UserStoreError> {
        let username = draft.username.clone();
        let password = match draft.password.as_ref() {
            Some(password) if !username.is_empty() => password,
            _ => return Err(UserStoreError::IncompleteDraft),
        };
        let credential = Credential::derive(password.expose(), self.credential_params)?;

        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.register(username.clone(), credential);
        self.user_state.set_state(&next).await?;
        *state = next;
        drop(state);

        self.start_session(&username).await;
        info!(username = %username, "user registered");
        Ok(())
    }

    /// Check the credential. A mismatch, or no registered user, is an
    /// `Authentication` error and leaves the state untouched.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<FlowResult, UserStoreError> {
        let mut state = self.state.lock().await;

        let matches = match (state.username(), state.credential()) {
            (Some(stored), Some(credential)) if state.is_registered() && stored == username => {
                credential.verify(password.expose(), self.credential_params)?
            }
            _ => false,
        };
        if !matches {
            warn!(username = %username, "login rejected");
            return Ok(FlowResult::Error(FlowError::Authentication));
        }

        let mut next = state.clone();
        next.mark_logged_in();
        if next != *state {
            self.user_state.set_state(&next).await?;
            *state = next;
        }
        drop(state);

        self.start_session(username).await;
        info!(username = %username, "user logged in");
        Ok(FlowResult::Success)
    }

    /// Log out. Calling it again is a no-op.
    pub async fn logout(&self) -> Result<(), UserStoreError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.logout();
        if next != *state {
            self.user_state.set_state(&next).await?;
            *state = next;
            info!("user logged out");
        }
        drop(state);

        *self.session.lock().await = None;
        Ok(())
    }

    /// Forget the registered user entirely. The stored record is deleted.
    pub async fn unregister(&self) -> Result<(), UserStoreError> {
        let mut state = self.state.lock().await;
        self.user_state.reset().await?;
        state.unregister();
        drop(state);

        *self.session.lock().await = None;
        info!("user unregistered");
        Ok(())
    }

    /// Draw a new unread count for the current session.
    pub async fn refresh_unread_notifications(&self) -> Option<UserSession> {
        let mut session = self.session.lock().await;
        let current = session.as_mut()?;
        current.unread_notifications = self.notifications.unread_count();
        debug!(
            unread = current.unread_notifications,
            "unread notifications refreshed"
        );
        Some(current.clone())
    }

    async fn start_session(&self, username: &str) {
        let session = UserSession::new(username, self.notifications.unread_count());
        *self.session.lock().await = Some(session);
    }
}
