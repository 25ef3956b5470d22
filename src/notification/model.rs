//! The notification record.

use super::kind::{Kind, Position};
use super::options::NotificationOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new unique notification ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ephemeral user-facing message.
///
/// Everything except `visible` is fixed at creation. `visible` starts out
/// `true` and is cleared once by the owning lifecycle controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: String,
    position: Position,
    duration_ms: u64,
    persistent: bool,
    closable: bool,
    action_label: Option<String>,
    visible: bool,
}

impl Notification {
    pub fn new(kind: Kind, message: impl Into<String>, options: NotificationOptions) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: options.title,
            message: message.into(),
            position: options.position,
            duration_ms: options.duration_ms,
            persistent: options.persistent,
            closable: options.closable,
            action_label: options.action_label,
            visible: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action_label.as_deref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Delay after which the notification dismisses itself.
    /// Returns `None` for persistent notifications and for a zero duration.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        if self.persistent || self.duration_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.duration_ms))
        }
    }

    /// Clears `visible`. Returns `false` if it was already cleared.
    pub(crate) fn mark_dismissed(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Kind::Info, "test", NotificationOptions::default());
        let n2 = Notification::new(Kind::Info, "test", NotificationOptions::default());
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn new_notification_is_visible() {
        let notification = Notification::new(Kind::Success, "Saved", NotificationOptions::default());
        assert!(notification.is_visible());
        assert_eq!(notification.message(), "Saved");
        assert_eq!(notification.kind(), Kind::Success);
    }

    #[test]
    fn persistent_overrides_duration() {
        let options = NotificationOptions::new().duration_ms(100).persistent(true);
        let notification = Notification::new(Kind::Warning, "Low stock", options);
        assert!(notification.auto_dismiss_after().is_none());
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let options = NotificationOptions::new().duration_ms(0);
        let notification = Notification::new(Kind::Error, "Oven offline", options);
        assert!(notification.auto_dismiss_after().is_none());
    }

    #[test]
    fn positive_duration_becomes_delay() {
        let options = NotificationOptions::new().duration_ms(250);
        let notification = Notification::new(Kind::Info, "Fresh bread", options);
        assert_eq!(notification.auto_dismiss_after(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn mark_dismissed_reports_first_transition_only() {
        let mut notification = Notification::new(Kind::Info, "Fresh bread", NotificationOptions::default());
        assert!(notification.mark_dismissed());
        assert!(!notification.is_visible());
        assert!(!notification.mark_dismissed());
    }
}
