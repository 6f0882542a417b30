//! Transient notifications
//!
//! Toast messages queued by the form and the detail page. The UI drains the
//! queue after each user action and schedules removal after
//! [`Notifier::display_ms`].

use serde::Serialize;
use std::collections::VecDeque;

use crate::config::NotificationConfig;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Info,
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// FIFO of pending toasts
#[derive(Debug, Default)]
pub struct Notifier {
    queue: VecDeque<Notification>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast, returning its id
    pub fn push(&mut self, level: Level, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            level,
            title: title.into(),
            description,
        };
        tracing::debug!(id = notification.id, ?level, title = %notification.title, "notification queued");
        self.queue.push_back(notification);
        self.next_id
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(Level::Success, title, Some(description.into()))
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(Level::Error, title, Some(description.into()))
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(Level::Info, title, Some(description.into()))
    }

    /// Pending toasts, oldest first
    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Take every pending toast
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// Drop a toast before it is drained
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.queue.len();
        self.queue.retain(|n| n.id != id);
        self.queue.len() != before
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// How long a toast of `level` stays visible
    pub fn display_ms(level: Level, config: &NotificationConfig) -> u32 {
        match level {
            Level::Error => config.error_ms,
            Level::Success | Level::Info => config.success_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order_and_drain() {
        let mut notifier = Notifier::new();
        let first = notifier.success("Saved", "ok");
        let second = notifier.error("Refused", "too big");
        assert!(second > first);
        assert_eq!(notifier.len(), 2);

        let drained = notifier.drain();
        assert_eq!(drained[0].level, Level::Success);
        assert_eq!(drained[1].title, "Refused");
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut notifier = Notifier::new();
        let id = notifier.info("Partage", "Lien copié");
        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));
    }

    #[test]
    fn test_display_duration_by_level() {
        let config = NotificationConfig::default();
        assert_eq!(Notifier::display_ms(Level::Success, &config), 3000);
        assert_eq!(Notifier::display_ms(Level::Error, &config), 5000);
    }
}
