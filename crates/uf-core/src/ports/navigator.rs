use crate::navigation::{NavigationCommand, ScreenTarget};

/// Presentation collaborator that performs screen transitions.
#[async_trait::async_trait]
pub trait NavigatorPort: Send + Sync {
    /// Called after every history change with the resulting back-stack.
    async fn apply(&self, command: NavigationCommand, history: &[ScreenTarget]);
}
