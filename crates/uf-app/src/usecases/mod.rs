//! Flow controllers and the stores they share.
//!
//! ```text
//! EntryRouter ──> RegistrationFlow ──┐
//!      │     └──> LoginFlow ─────────┼──> UserStore ──> UserStatePort
//!      │                             └──> NavigationDispatcher ──> NavigatorPort
//! SettingsFlow / MainScreen
//! ```

pub mod context;
pub mod entry;
pub mod login;
pub mod main_screen;
pub mod navigation;
pub mod registration;
pub mod settings;
pub mod user_store;

pub use entry::EntryRouter;
pub use login::{LoginFlow, LoginFlowError};
pub use main_screen::MainScreen;
pub use navigation::NavigationDispatcher;
pub use registration::{RegistrationFlow, RegistrationFlowError};
pub use settings::SettingsFlow;
pub use user_store::{UserStore, UserStoreError};
