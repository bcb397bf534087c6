use crate::login::LoginScreenState;
use crate::registration::RegistrationState;
use crate::user::UserSession;

/// Presentation collaborator that observes flow state (error indicators,
/// field enablement, session texts).
#[async_trait::async_trait]
pub trait FlowEventPort: Send + Sync {
    async fn emit_registration_state_changed(&self, state: RegistrationState);
    async fn emit_login_state_changed(&self, state: LoginScreenState);
    async fn emit_session_changed(&self, session: Option<UserSession>);
}
