//! User state port
//!
//! This port defines the contract for persisting and retrieving the user's
//! registration/login record. Implementations are provided by the
//! infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

use crate::user::UserState;

#[async_trait]
pub trait UserStatePort: Send + Sync {
    /// Load the stored state, or the default state when nothing was stored.
    async fn get_state(&self) -> anyhow::Result<UserState>;

    /// Replace the stored state.
    async fn set_state(&self, state: &UserState) -> anyhow::Result<()>;

    /// Delete the stored state; the next `get_state` yields the default.
    async fn reset(&self) -> anyhow::Result<()>;
}
