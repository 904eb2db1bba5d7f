//! Commit confirmation banner
//!
//! After a successful commit the UI shows a short-lived confirmation. This is
//! the state behind it; rendering is left to the caller.

use std::time::{Duration, Instant};

/// Message shown after a transaction is recorded
pub const CREATED_MESSAGE: &str = "Transaction successfully created.";

/// A transient confirmation
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    /// The standard "transaction created" confirmation
    pub fn created(duration: Duration) -> Self {
        Self::new(CREATED_MESSAGE, duration)
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_message() {
        let notification = Notification::created(Duration::from_secs(2));
        assert_eq!(notification.message, "Transaction successfully created.");
        assert!(!notification.is_expired());
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let notification = Notification::created(Duration::ZERO);
        assert!(notification.is_expired());
    }
}
