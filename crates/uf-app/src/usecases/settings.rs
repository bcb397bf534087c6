//! Settings screen use cases.

use std::sync::Arc;

use tracing::info;

use uf_core::navigation::ScreenTarget;
use uf_core::ports::FlowEventPort;
use uf_core::UserSession;

use crate::usecases::entry::EntryRouter;
use crate::usecases::navigation::NavigationDispatcher;
use crate::usecases::user_store::{UserStore, UserStoreError};

pub struct SettingsFlow {
    user_store: Arc<UserStore>,
    navigation: Arc<NavigationDispatcher>,
    entry: Arc<EntryRouter>,
    flow_events: Arc<dyn FlowEventPort>,
}

impl SettingsFlow {
    pub fn new(
        user_store: Arc<UserStore>,
        navigation: Arc<NavigationDispatcher>,
        entry: Arc<EntryRouter>,
        flow_events: Arc<dyn FlowEventPort>,
    ) -> Self {
        Self {
            user_store,
            navigation,
            entry,
            flow_events,
        }
    }

    pub async fn refresh_notifications(&self) -> Option<UserSession> {
        let session = self.user_store.refresh_unread_notifications().await;
        self.flow_events.emit_session_changed(session.clone()).await;
        session
    }

    /// Leave Settings. Landing on Main re-emits the session so its texts
    /// show the latest unread count.
    pub async fn back(&self) -> bool {
        if !self.navigation.back().await {
            return false;
        }
        if self.navigation.current().await == Some(ScreenTarget::Main) {
            self.flow_events
                .emit_session_changed(self.user_store.session().await)
                .await;
        }
        true
    }

    /// Log out, then route again from the entry point with history cleared.
    pub async fn logout(&self) -> Result<ScreenTarget, UserStoreError> {
        self.user_store.logout().await?;
        self.flow_events.emit_session_changed(None).await;
        let target = self.entry.route().await;
        info!(%target, "logged out");
        Ok(target)
    }
}
