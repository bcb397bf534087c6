//! Launch routing.

use crate::navigation::ScreenTarget;

/// Screen the app opens on, decided from the persisted user state.
pub struct EntryRoute;

impl EntryRoute {
    pub fn decide(is_logged_in: bool, is_registered: bool) -> ScreenTarget {
        match (is_logged_in, is_registered) {
            (true, _) => ScreenTarget::Main,
            (false, false) => ScreenTarget::Registration,
            (false, true) => ScreenTarget::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_goes_to_main() {
        assert_eq!(EntryRoute::decide(true, true), ScreenTarget::Main);
    }

    #[test]
    fn unregistered_goes_to_registration() {
        assert_eq!(EntryRoute::decide(false, false), ScreenTarget::Registration);
    }

    #[test]
    fn registered_but_logged_out_goes_to_login() {
        assert_eq!(EntryRoute::decide(false, true), ScreenTarget::Login);
    }

    #[test]
    fn logged_in_without_registration_still_dispatches_once() {
        // Not producible by UserState; the router still picks exactly one screen.
        assert_eq!(EntryRoute::decide(true, false), ScreenTarget::Main);
    }
}
