use std::sync::Arc;

use uf_core::navigation::{NavigationCommand, ScreenTarget};

use crate::usecases::navigation::NavigationDispatcher;
use crate::usecases::user_store::UserStore;

/// Texts and actions of the main screen. Every text is `None` without a
/// logged-in session.
pub struct MainScreen {
    user_store: Arc<UserStore>,
    navigation: Arc<NavigationDispatcher>,
}

impl MainScreen {
    pub fn new(user_store: Arc<UserStore>, navigation: Arc<NavigationDispatcher>) -> Self {
        Self {
            user_store,
            navigation,
        }
    }

    pub async fn welcome_text(&self) -> Option<String> {
        self.user_store
            .session()
            .await
            .map(|session| session.welcome_text())
    }

    pub async fn notifications_text(&self) -> Option<String> {
        self.user_store
            .session()
            .await
            .map(|session| session.notifications_text())
    }

    /// Push Settings on top of Main. Returns `None` when nobody is logged in
    /// or Main is not the current screen.
    pub async fn open_settings(&self) -> Option<NavigationCommand> {
        if self.user_store.session().await.is_none() {
            return None;
        }
        if self.navigation.current().await != Some(ScreenTarget::Main) {
            return None;
        }
        Some(self.navigation.navigate(ScreenTarget::Settings, false).await)
    }
}
