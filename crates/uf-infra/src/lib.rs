//! Infrastructure adapters for the user flow: state persistence, application
//! directories, and the notification counter.

pub mod app_dirs;
pub mod memory;
pub mod notifications;
pub mod user_state;

pub use app_dirs::DirsAppDirsAdapter;
pub use memory::InMemoryUserStateRepository;
pub use notifications::RandomNotificationCounter;
pub use user_state::FileUserStateRepository;
