use std::sync::Arc;

use tracing::info;

use crate::deps::AppDeps;
use crate::usecases::{
    EntryRouter, LoginFlow, MainScreen, NavigationDispatcher, RegistrationFlow, SettingsFlow,
    UserStore, UserStoreError,
};

/// The assembled application: every flow controller wired to its
/// collaborators.
pub struct App {
    pub user_store: Arc<UserStore>,
    pub navigation: Arc<NavigationDispatcher>,
    pub registration: Arc<RegistrationFlow>,
    pub login: Arc<LoginFlow>,
    pub entry: Arc<EntryRouter>,
    pub main_screen: Arc<MainScreen>,
    pub settings: Arc<SettingsFlow>,
}

impl App {
    /// This constructor signature IS the dependency manifest.
    ///
    /// Loads the stored user state; nothing is shown until [`EntryRouter::route`].
    pub async fn build(deps: AppDeps) -> Result<Self, UserStoreError> {
        let AppDeps {
            user_state,
            navigator,
            flow_events,
            notifications,
            policy,
            credential_params,
        } = deps;

        let user_store =
            Arc::new(UserStore::load(user_state, notifications, credential_params).await?);
        let navigation = Arc::new(NavigationDispatcher::new(navigator));
        let registration = Arc::new(RegistrationFlow::new(
            policy,
            user_store.clone(),
            navigation.clone(),
            flow_events.clone(),
        ));
        let login = Arc::new(LoginFlow::new(
            user_store.clone(),
            navigation.clone(),
            registration.clone(),
            flow_events.clone(),
        ));
        let entry = Arc::new(EntryRouter::new(
            user_store.clone(),
            navigation.clone(),
            registration.clone(),
            login.clone(),
            flow_events.clone(),
        ));
        let main_screen = Arc::new(MainScreen::new(user_store.clone(), navigation.clone()));
        let settings = Arc::new(SettingsFlow::new(
            user_store.clone(),
            navigation.clone(),
            entry.clone(),
            flow_events,
        ));

        info!("app assembled");
        Ok(Self {
            user_store,
            navigation,
            registration,
            login,
            entry,
            main_screen,
            settings,
        })
    }
}
