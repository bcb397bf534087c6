use serde::Serialize;

/// Data that lives only while a user is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSession {
    pub username: String,
    pub unread_notifications: u32,
}

impl UserSession {
    pub fn new(username: impl Into<String>, unread_notifications: u32) -> Self {
        Self {
            username: username.into(),
            unread_notifications,
        }
    }

    pub fn welcome_text(&self) -> String {
        format!("Hello {}!", self.username)
    }

    pub fn notifications_text(&self) -> String {
        format!("You have {} unread notifications", self.unread_notifications)
    }
}
