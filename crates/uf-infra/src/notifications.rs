use rand::Rng;
use uf_core::ports::NotificationCounterPort;

/// Upper bound (exclusive) for generated unread counts.
pub const MAX_UNREAD_NOTIFICATIONS: u32 = 100;

/// Stand-in notification backend: every refresh draws a random unread count.
#[derive(Debug, Default)]
pub struct RandomNotificationCounter;

impl RandomNotificationCounter {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationCounterPort for RandomNotificationCounter {
    fn unread_count(&self) -> u32 {
        rand::rng().random_range(0..MAX_UNREAD_NOTIFICATIONS)
    }
}
