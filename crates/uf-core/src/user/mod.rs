//! User domain models
//!
//! This module defines the persisted registration/login record of the single
//! device user, the transient registration draft, and the data scoped to a
//! logged-in session.

mod session;
mod state;

pub use session::UserSession;
pub use state::{RegistrationDraft, UserState};
