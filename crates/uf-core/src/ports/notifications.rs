/// Source of the unread-notification count shown on the main screen.
pub trait NotificationCounterPort: Send + Sync {
    fn unread_count(&self) -> u32;
}
