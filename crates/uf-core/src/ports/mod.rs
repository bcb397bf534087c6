//! Port interfaces for the application layer
//!
//! Ports define the contract between the flow controllers (use cases) and
//! infrastructure or presentation implementations. The core stays free of
//! storage, terminal, and platform concerns.
//!
//! ## Port Placement Guidelines
//!
//! Place a port here when it represents a capability used by more than one
//! use case and is implemented outside the core.

pub mod app_dirs;
pub mod errors;
pub mod flow_event;
pub mod navigator;
pub mod notifications;
pub mod user_state;

pub use app_dirs::AppDirsPort;
pub use errors::AppDirsError;
pub use flow_event::FlowEventPort;
pub use navigator::NavigatorPort;
pub use notifications::NotificationCounterPort;
pub use user_state::UserStatePort;
