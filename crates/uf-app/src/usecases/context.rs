use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared flow context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole dispatch (transition, actions, state update).
/// - `state`: used for both reading (`get_state`) and writing.
pub struct FlowContext<S> {
    state: Mutex<S>,
    dispatch_lock: Mutex<()>,
}

impl<S: Clone> FlowContext<S> {
    pub fn new(initial_state: S) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read; does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> S {
        self.state.lock().await.clone()
    }

    /// Serializes dispatch calls. The lock is released when the guard drops.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Should only be called while holding the dispatch lock.
    pub async fn set_state(&self, state: S) {
        *self.state.lock().await = state;
    }
}

impl<S: Clone + Default> Default for FlowContext<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
