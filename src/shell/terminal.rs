//! Terminal presentation adapter.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::warn;
use uf_core::login::{LoginPhase, LoginScreenState};
use uf_core::navigation::{NavigationCommand, ScreenTarget};
use uf_core::ports::{FlowEventPort, NavigatorPort};
use uf_core::registration::RegistrationState;
use uf_core::UserSession;

/// Renders navigation and flow state as plain text lines.
pub struct TerminalPresenter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalPresenter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn line(&self, text: impl AsRef<str>) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{}", text.as_ref()).and_then(|_| out.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }

    pub fn prompt(&self, screen: Option<ScreenTarget>) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let label = screen.map(|screen| screen.name()).unwrap_or("-");
        if let Err(err) = write!(out, "[{label}]> ").and_then(|_| out.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }
}

pub fn screen_hint(screen: ScreenTarget) -> &'static str {
    match screen {
        ScreenTarget::EnterDetails => "Choose a username and password: details <username> <password>",
        ScreenTarget::TermsAndConditions => "Terms and conditions: accept, or back",
        ScreenTarget::Login => "Log in: login <password>, or unregister",
        ScreenTarget::Main => "Main: settings",
        ScreenTarget::Settings => "Settings: refresh, logout, or back",
        ScreenTarget::Registration => "Registration",
    }
}

#[async_trait]
impl NavigatorPort for TerminalPresenter {
    async fn apply(&self, command: NavigationCommand, history: &[ScreenTarget]) {
        let trail = history
            .iter()
            .map(|screen| screen.name())
            .collect::<Vec<_>>()
            .join(" > ");
        self.line(format!("== {trail}"));
        let shown = match command {
            NavigationCommand::Forward(target) | NavigationCommand::NewRoot(target) => Some(target),
            NavigationCommand::Back => history.last().copied(),
        };
        // Registration is a container; its first step follows immediately.
        if let Some(screen) = shown.filter(|screen| *screen != ScreenTarget::Registration) {
            self.line(screen_hint(screen));
        }
    }
}

#[async_trait]
impl FlowEventPort for TerminalPresenter {
    async fn emit_registration_state_changed(&self, state: RegistrationState) {
        match state {
            RegistrationState::EnteringDetails { error: Some(error) } => {
                self.line(format!("! {}", error.message()))
            }
            RegistrationState::Registered => self.line("Registered."),
            RegistrationState::Abandoned => self.line("Registration cancelled."),
            _ => {}
        }
    }

    async fn emit_login_state_changed(&self, state: LoginScreenState) {
        if let Some(error) = &state.error {
            self.line(format!("! {}", error.message()));
            return;
        }
        if state.phase == LoginPhase::AwaitingCredentials {
            if let Some(username) = &state.username {
                self.line(format!("Username: {username} (locked)"));
            }
        }
    }

    async fn emit_session_changed(&self, session: Option<UserSession>) {
        if let Some(session) = session {
            self.line(session.welcome_text());
            self.line(session.notifications_text());
        }
    }
}
