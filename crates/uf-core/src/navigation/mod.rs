//! Navigation domain module.
//!
//! Screen targets, the commands reported to the presentation layer, and the
//! back-stack history.

mod history;

pub use history::NavigationHistory;

use serde::{Deserialize, Serialize};

/// Navigable destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenTarget {
    Main,
    Registration,
    EnterDetails,
    TermsAndConditions,
    Login,
    Settings,
}

impl ScreenTarget {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenTarget::Main => "main",
            ScreenTarget::Registration => "registration",
            ScreenTarget::EnterDetails => "enter-details",
            ScreenTarget::TermsAndConditions => "terms-and-conditions",
            ScreenTarget::Login => "login",
            ScreenTarget::Settings => "settings",
        }
    }
}

impl std::fmt::Display for ScreenTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// History change reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationCommand {
    /// Push a screen on top of the current one.
    Forward(ScreenTarget),
    /// Clear history and open a screen as the new root.
    NewRoot(ScreenTarget),
    /// Pop the current screen.
    Back,
}
