//! Launch routing use case.

use std::sync::Arc;

use tracing::info;

use uf_core::navigation::ScreenTarget;
use uf_core::ports::FlowEventPort;
use uf_core::EntryRoute;

use crate::usecases::login::LoginFlow;
use crate::usecases::navigation::NavigationDispatcher;
use crate::usecases::registration::RegistrationFlow;
use crate::usecases::user_store::UserStore;

/// Picks the first screen from the stored user state and opens it as the
/// only history entry.
pub struct EntryRouter {
    user_store: Arc<UserStore>,
    navigation: Arc<NavigationDispatcher>,
    registration: Arc<RegistrationFlow>,
    login: Arc<LoginFlow>,
    flow_events: Arc<dyn FlowEventPort>,
}

impl EntryRouter {
    pub fn new(
        user_store: Arc<UserStore>,
        navigation: Arc<NavigationDispatcher>,
        registration: Arc<RegistrationFlow>,
        login: Arc<LoginFlow>,
        flow_events: Arc<dyn FlowEventPort>,
    ) -> Self {
        Self {
            user_store,
            navigation,
            registration,
            login,
            flow_events,
        }
    }

    pub async fn route(&self) -> ScreenTarget {
        let logged_in = self.user_store.is_user_logged_in().await;
        let registered = self.user_store.is_user_registered().await;
        let target = EntryRoute::decide(logged_in, registered);
        info!(logged_in, registered, %target, "entry route decided");

        self.navigation.navigate(target, true).await;
        match target {
            ScreenTarget::Registration => {
                self.registration.start().await;
            }
            ScreenTarget::Login => {
                self.login.enter().await;
            }
            _ => {
                self.flow_events
                    .emit_session_changed(self.user_store.session().await)
                    .await;
            }
        }
        target
    }
}
