//! Line-based driver for the flow controllers.

pub mod command;
pub mod terminal;

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};
use uf_app::App;
use uf_core::navigation::ScreenTarget;

pub use command::{CommandError, ShellCommand, HELP};
pub use terminal::TerminalPresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

pub struct Shell {
    app: App,
    presenter: Arc<TerminalPresenter>,
}

impl Shell {
    pub fn new(app: App, presenter: Arc<TerminalPresenter>) -> Self {
        Self { app, presenter }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Route to the first screen.
    pub async fn start(&self) -> ScreenTarget {
        self.app.entry.route().await
    }

    pub async fn current_screen(&self) -> Option<ScreenTarget> {
        self.app.navigation.current().await
    }

    /// Run one command to completion.
    pub async fn execute(&self, command: ShellCommand) -> anyhow::Result<ShellFlow> {
        let current = self.current_screen().await;
        if !command.available_on(current) {
            let screen = current.map(|screen| screen.name()).unwrap_or("-");
            self.presenter
                .line(format!("not available on the {screen} screen (try `help`)"));
            return Ok(ShellFlow::Continue);
        }

        let span = info_span!("shell.execute", screen = ?current);
        async {
            debug!(?command, "shell command");
            match command {
                ShellCommand::Details { username, password } => {
                    let result = self.app.registration.validate_input(username, password).await?;
                    debug!(accepted = result.is_success(), "details submitted");
                }
                ShellCommand::Edit => {
                    self.app.registration.field_edited().await?;
                }
                ShellCommand::Accept => {
                    self.app.registration.accept_terms().await?;
                }
                ShellCommand::Login { password } => {
                    let username = self.app.login.state().await.username.unwrap_or_default();
                    let result = self.app.login.login(username, password).await?;
                    debug!(accepted = result.is_success(), "login submitted");
                }
                ShellCommand::PasswordEdit => {
                    self.app.login.password_edited().await?;
                }
                ShellCommand::Unregister => {
                    self.app.login.unregister().await?;
                }
                ShellCommand::Settings => {
                    self.app.main_screen.open_settings().await;
                }
                ShellCommand::Refresh => {
                    self.app.settings.refresh_notifications().await;
                }
                ShellCommand::Logout => {
                    self.app.settings.logout().await?;
                }
                ShellCommand::Back => {
                    if !self.back(current).await? {
                        // Nothing left to go back to: leave like the platform would.
                        return Ok(ShellFlow::Quit);
                    }
                }
                ShellCommand::Status => self.status().await,
                ShellCommand::Help => self.presenter.line(HELP),
                ShellCommand::Quit => return Ok(ShellFlow::Quit),
            }
            Ok(ShellFlow::Continue)
        }
        .instrument(span)
        .await
    }

    async fn back(&self, current: Option<ScreenTarget>) -> anyhow::Result<bool> {
        match current {
            Some(ScreenTarget::EnterDetails | ScreenTarget::TermsAndConditions) => {
                let handled = self.app.registration.back().await?;
                Ok(handled || self.app.navigation.back().await)
            }
            Some(ScreenTarget::Settings) => Ok(self.app.settings.back().await),
            _ => Ok(self.app.navigation.back().await),
        }
    }

    async fn status(&self) {
        let history = self
            .app
            .navigation
            .entries()
            .await
            .iter()
            .map(|screen| screen.name())
            .collect::<Vec<_>>()
            .join(" > ");
        let store = &self.app.user_store;
        self.presenter.line(format!("history:    {history}"));
        self.presenter.line(format!(
            "registered: {}  logged in: {}  user: {}",
            store.is_user_registered().await,
            store.is_user_logged_in().await,
            store.username().await.unwrap_or_else(|| "-".to_string())
        ));
        if let Some(text) = self.app.main_screen.welcome_text().await {
            self.presenter.line(text);
        }
        if let Some(text) = self.app.main_screen.notifications_text().await {
            self.presenter.line(text);
        }
    }
}
