//! Navigation dispatcher.
//!
//! Owns the back-stack and reports every change to the presentation layer.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use uf_core::navigation::{NavigationCommand, NavigationHistory, ScreenTarget};
use uf_core::ports::NavigatorPort;

pub struct NavigationDispatcher {
    history: Mutex<NavigationHistory>,
    navigator: Arc<dyn NavigatorPort>,
}

impl NavigationDispatcher {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self {
            history: Mutex::new(NavigationHistory::new()),
            navigator,
        }
    }

    /// Open `target`; with `clear_history` nothing before it stays reachable.
    pub async fn navigate(&self, target: ScreenTarget, clear_history: bool) -> NavigationCommand {
        let (command, entries) = {
            let mut history = self.history.lock().await;
            let command = history.navigate(target, clear_history);
            (command, history.entries().to_vec())
        };
        info!(?command, depth = entries.len(), "navigate");
        self.navigator.apply(command, &entries).await;
        command
    }

    /// Pop one entry. `false` means no history remains and the caller should
    /// fall back to default platform behavior.
    pub async fn back(&self) -> bool {
        let (popped, entries) = {
            let mut history = self.history.lock().await;
            let popped = history.back();
            (popped, history.entries().to_vec())
        };
        debug!(popped, depth = entries.len(), "navigate back");
        if popped {
            self.navigator.apply(NavigationCommand::Back, &entries).await;
        }
        popped
    }

    pub async fn current(&self) -> Option<ScreenTarget> {
        self.history.lock().await.current()
    }

    pub async fn entries(&self) -> Vec<ScreenTarget> {
        self.history.lock().await.entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        commands: std::sync::Mutex<Vec<NavigationCommand>>,
    }

    #[async_trait::async_trait]
    impl NavigatorPort for RecordingNavigator {
        async fn apply(&self, command: NavigationCommand, _history: &[ScreenTarget]) {
            self.commands.lock().unwrap().push(command);
        }
    }

    #[tokio::test]
    async fn navigate_main_with_clear_then_back_returns_false() {
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = NavigationDispatcher::new(navigator.clone());
        dispatcher.navigate(ScreenTarget::Registration, true).await;
        dispatcher.navigate(ScreenTarget::EnterDetails, false).await;

        dispatcher.navigate(ScreenTarget::Main, true).await;

        assert_eq!(dispatcher.entries().await, vec![ScreenTarget::Main]);
        assert!(!dispatcher.back().await);
        assert_eq!(
            navigator.commands.lock().unwrap().last(),
            Some(&NavigationCommand::NewRoot(ScreenTarget::Main))
        );
    }

    #[tokio::test]
    async fn settings_is_pushed_and_popped() {
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = NavigationDispatcher::new(navigator.clone());
        dispatcher.navigate(ScreenTarget::Main, true).await;
        dispatcher.navigate(ScreenTarget::Settings, false).await;

        assert!(dispatcher.back().await);

        assert_eq!(dispatcher.current().await, Some(ScreenTarget::Main));
        assert_eq!(
            navigator.commands.lock().unwrap().as_slice(),
            &[
                NavigationCommand::NewRoot(ScreenTarget::Main),
                NavigationCommand::Forward(ScreenTarget::Settings),
                NavigationCommand::Back,
            ]
        );
    }
}
