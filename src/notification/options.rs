//! Creation options for a notification.

use super::kind::Position;
use crate::constants::DEFAULT_DURATION_MS;
use serde::{Deserialize, Serialize};

/// Optional attributes recognised by `create_notification`.
///
/// Anything left unset keeps the component defaults: top-right placement,
/// a 5 second auto-dismiss, closable, not persistent, no title and no action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationOptions {
    pub title: Option<String>,
    pub position: Position,
    /// Auto-dismiss delay in milliseconds (0 = never)
    pub duration_ms: u64,
    /// Disables auto-dismiss regardless of `duration_ms`
    pub persistent: bool,
    /// Whether a close affordance is offered
    pub closable: bool,
    pub action_label: Option<String>,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            title: None,
            position: Position::default(),
            duration_ms: DEFAULT_DURATION_MS,
            persistent: false,
            closable: true,
            action_label: None,
        }
    }
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = NotificationOptions::default();
        assert_eq!(options.position, Position::TopRight);
        assert_eq!(options.duration_ms, 5_000);
        assert!(options.closable);
        assert!(!options.persistent);
        assert!(options.title.is_none());
        assert!(options.action_label.is_none());
    }

    #[test]
    fn test_builder_overrides_only_named_fields() {
        let options = NotificationOptions::new()
            .title("Saved")
            .position(Position::BottomCenter)
            .action_label("Undo");

        assert_eq!(options.title.as_deref(), Some("Saved"));
        assert_eq!(options.position, Position::BottomCenter);
        assert_eq!(options.action_label.as_deref(), Some("Undo"));
        assert_eq!(options.duration_ms, DEFAULT_DURATION_MS);
        assert!(options.closable);
    }
}
