use super::{NavigationCommand, ScreenTarget};

/// Ordered back-stack of visited screens. The last entry is the current screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<ScreenTarget>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `target`. With `clear_history`, every prior entry is dropped so
    /// back-navigation cannot reach screens before `target`.
    pub fn navigate(&mut self, target: ScreenTarget, clear_history: bool) -> NavigationCommand {
        if clear_history {
            self.entries.clear();
            self.entries.push(target);
            NavigationCommand::NewRoot(target)
        } else {
            self.entries.push(target);
            NavigationCommand::Forward(target)
        }
    }

    /// Pop the current screen. Returns false when there is nothing left to go
    /// back to; the caller then falls back to default platform behavior.
    pub fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        true
    }

    pub fn current(&self) -> Option<ScreenTarget> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[ScreenTarget] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_without_clear_pushes() {
        let mut history = NavigationHistory::new();
        history.navigate(ScreenTarget::Main, false);
        let command = history.navigate(ScreenTarget::Settings, false);
        assert_eq!(command, NavigationCommand::Forward(ScreenTarget::Settings));
        assert_eq!(
            history.entries(),
            &[ScreenTarget::Main, ScreenTarget::Settings]
        );
    }

    #[test]
    fn navigate_with_clear_leaves_single_entry_and_back_fails() {
        let mut history = NavigationHistory::new();
        history.navigate(ScreenTarget::Registration, false);
        history.navigate(ScreenTarget::EnterDetails, false);
        history.navigate(ScreenTarget::TermsAndConditions, false);

        let command = history.navigate(ScreenTarget::Main, true);

        assert_eq!(command, NavigationCommand::NewRoot(ScreenTarget::Main));
        assert_eq!(history.entries(), &[ScreenTarget::Main]);
        assert!(!history.back());
        assert_eq!(history.current(), Some(ScreenTarget::Main));
    }

    #[test]
    fn back_pops_settings_to_main() {
        let mut history = NavigationHistory::new();
        history.navigate(ScreenTarget::Main, true);
        history.navigate(ScreenTarget::Settings, false);
        assert!(history.back());
        assert_eq!(history.current(), Some(ScreenTarget::Main));
    }

    #[test]
    fn back_on_empty_history_is_false() {
        let mut history = NavigationHistory::new();
        assert!(!history.back());
        assert_eq!(history.current(), None);
    }
}
