//! In-memory user state repository, for ephemeral runs and tests.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uf_core::ports::UserStatePort;
use uf_core::user::UserState;

#[derive(Default)]
pub struct InMemoryUserStateRepository {
    state: Mutex<UserState>,
    writes: Mutex<usize>,
}

impl InMemoryUserStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: UserState) -> Self {
        Self {
            state: Mutex::new(state),
            writes: Mutex::new(0),
        }
    }

    /// Number of `set_state` calls so far.
    pub async fn write_count(&self) -> usize {
        *self.writes.lock().await
    }
}

#[async_trait]
impl UserStatePort for InMemoryUserStateRepository {
    async fn get_state(&self) -> anyhow::Result<UserState> {
        Ok(self.state.lock().await.clone())
    }

    async fn set_state(&self, state: &UserState) -> anyhow::Result<()> {
        *self.state.lock().await = state.clone();
        *self.writes.lock().await += 1;
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        *self.state.lock().await = UserState::default();
        Ok(())
    }
}
